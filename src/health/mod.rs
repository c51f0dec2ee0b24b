//! Health classification of collected metrics.
//!
//! Maps each metric of a [`MetricsSnapshot`](crate::metrics::MetricsSnapshot)
//! onto a [`StatusLevel`] using fixed thresholds:
//!
//! | Metric             | good   | warning | critical | neutral          |
//! |--------------------|--------|---------|----------|------------------|
//! | `query_count`      | ≤100   | 101-200 | >200     |                  |
//! | `memory_percent`   | ≤60    | >60-80  | >80      |                  |
//! | `slow_query_count` | 0      | 1-5     | >5       | query log off    |
//! | `autoload_size_kb` | ≤500   | >500-800| >800     |                  |
//! | `object_cache`     | active |         |          | inactive         |

mod classifier;
pub mod format;
mod status;

pub use classifier::{
    autoload_level, classify, classify_all, classify_named, memory_level, query_count_level,
    slow_query_level, Thresholds,
};
pub use status::{Metric, StatusCard, StatusLevel, UnknownMetric};
