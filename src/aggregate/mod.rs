//! Stateless aggregation queries over a classified [`Dataset`].
//!
//! Every operation tolerates an empty dataset (or empty partition) by
//! returning empty or `None` results instead of failing. Results are plain
//! value types recomputed per call; nothing here mutates the dataset.
//!
//! [`Dataset`]: crate::parser::Dataset

mod breakdown;
mod counts;
mod histogram;

pub use breakdown::{
    partition_means, proto_crosstab, state_breakdown, CrosstabRow, MeanStats, PartitionMeans,
    ProtoCrosstab, StateBreakdown, StateCounts,
};
pub use counts::{malicious_endpoints, top_k, value_counts, EndpointTriple, ValueCount};
pub use histogram::{outlier_trimmed_histogram, percentile, Histogram};
