//! Derived scalar summaries over a classified dataset. Pure and
//! deterministic; empty partitions surface as `None` rather than a
//! fabricated value.

use crate::aggregate::partition_means;
use crate::parser::Dataset;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Whole-dataset scalars for the summary view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_flows: usize,
    /// Earliest/latest valid StartTime; `None` when no row carried one.
    pub first_seen: Option<NaiveDateTime>,
    pub last_seen: Option<NaiveDateTime>,
    pub unique_src_addrs: usize,
    pub unique_dst_addrs: usize,
    pub botnet_flows: usize,
    /// Share of botnet flows; `None` for an empty dataset.
    pub botnet_ratio: Option<f64>,
}

pub fn dataset_summary(dataset: &Dataset) -> DatasetSummary {
    let mut src: HashSet<&str> = HashSet::new();
    let mut dst: HashSet<&str> = HashSet::new();
    let mut first: Option<NaiveDateTime> = None;
    let mut last: Option<NaiveDateTime> = None;
    let mut botnet = 0usize;

    for record in &dataset.records {
        src.insert(record.src_addr.as_str());
        dst.insert(record.dst_addr.as_str());
        if let Some(ts) = record.start_time {
            first = Some(first.map_or(ts, |f| f.min(ts)));
            last = Some(last.map_or(ts, |l| l.max(ts)));
        }
        if record.is_botnet {
            botnet += 1;
        }
    }

    let total = dataset.len();
    DatasetSummary {
        total_flows: total,
        first_seen: first,
        last_seen: last,
        unique_src_addrs: src.len(),
        unique_dst_addrs: dst.len(),
        botnet_flows: botnet,
        botnet_ratio: (total > 0).then(|| botnet as f64 / total as f64),
    }
}

/// Behavioral profile of one is_botnet partition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficProfile {
    pub flows: usize,
    pub avg_bytes: Option<f64>,
    pub avg_packets: Option<f64>,
    pub avg_duration: Option<f64>,
    /// Most frequent protocol; `None` for an empty partition.
    pub top_protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficProfiles {
    pub normal: TrafficProfile,
    pub botnet: TrafficProfile,
}

/// Side-by-side behavior profiles of botnet and normal traffic.
pub fn traffic_profiles(dataset: &Dataset) -> TrafficProfiles {
    let means = partition_means(dataset);
    let normal_flows = dataset.len() - dataset.botnet_count();
    TrafficProfiles {
        normal: TrafficProfile {
            flows: normal_flows,
            avg_bytes: means.normal.avg_bytes,
            avg_packets: means.normal.avg_packets,
            avg_duration: means.normal.avg_duration,
            top_protocol: modal_protocol(dataset, false),
        },
        botnet: TrafficProfile {
            flows: dataset.botnet_count(),
            avg_bytes: means.botnet.avg_bytes,
            avg_packets: means.botnet.avg_packets,
            avg_duration: means.botnet.avg_duration,
            top_protocol: modal_protocol(dataset, true),
        },
    }
}

/// Most frequent protocol within one partition, ties broken by
/// first-encountered order. `None` when the partition has no records.
pub fn modal_protocol(dataset: &Dataset, botnet: bool) -> Option<String> {
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for (idx, record) in dataset.records.iter().enumerate() {
        if record.is_botnet != botnet {
            continue;
        }
        let entry = counts.entry(record.proto.as_str()).or_insert((0, idx));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .min_by(|(_, (ca, ia)), (_, (cb, ib))| cb.cmp(ca).then(ia.cmp(ib)))
        .map(|(proto, _)| proto.to_string())
}
