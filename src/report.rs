//! Full analysis bundle handed to the presentation layer: every
//! distribution, ranking, crosstab and profile computed in one call.

use crate::aggregate::{
    malicious_endpoints, outlier_trimmed_histogram, partition_means, proto_crosstab,
    state_breakdown, top_k, value_counts, EndpointTriple, Histogram, PartitionMeans,
    ProtoCrosstab, StateBreakdown, ValueCount,
};
use crate::config::AggregationConfig;
use crate::insights::{dataset_summary, traffic_profiles, DatasetSummary, TrafficProfiles};
use crate::parser::Dataset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: DatasetSummary,
    pub protocol_distribution: Vec<ValueCount>,
    pub label_distribution: Vec<ValueCount>,
    pub top_src_addrs: Vec<ValueCount>,
    pub top_dst_addrs: Vec<ValueCount>,
    pub bytes_histogram: Histogram,
    pub packets_histogram: Histogram,
    pub partition_means: PartitionMeans,
    pub proto_crosstab: ProtoCrosstab,
    pub state_breakdown: StateBreakdown,
    pub malicious_endpoints: Vec<EndpointTriple>,
    pub profiles: TrafficProfiles,
}

impl AnalysisReport {
    /// Run every aggregation over a classified dataset.
    pub fn build(dataset: &Dataset, config: &AggregationConfig) -> Self {
        Self {
            summary: dataset_summary(dataset),
            protocol_distribution: value_counts(dataset, |r| Some(r.proto.as_str())),
            label_distribution: top_k(dataset, |r| r.label.as_deref(), config.label_top),
            top_src_addrs: top_k(dataset, |r| Some(r.src_addr.as_str()), config.top_talkers),
            top_dst_addrs: top_k(dataset, |r| Some(r.dst_addr.as_str()), config.top_talkers),
            bytes_histogram: outlier_trimmed_histogram(
                dataset,
                |r| r.tot_bytes.map(|v| v as f64),
                config.outlier_percentile,
                config.histogram_bins,
            ),
            packets_histogram: outlier_trimmed_histogram(
                dataset,
                |r| r.tot_pkts.map(|v| v as f64),
                config.outlier_percentile,
                config.histogram_bins,
            ),
            partition_means: partition_means(dataset),
            proto_crosstab: proto_crosstab(dataset),
            state_breakdown: state_breakdown(dataset),
            malicious_endpoints: malicious_endpoints(dataset, config.malicious_listing),
            profiles: traffic_profiles(dataset),
        }
    }
}
