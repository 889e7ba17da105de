pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::InvariantError;
#[cfg(feature = "metrics")]
pub use crate::metrics::LfuMetricsSnapshot;
pub use crate::policy::lfu::LfuCache;
pub use crate::traits::{CoreCache, LfuCacheTrait};
