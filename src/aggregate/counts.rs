//! Distinct-value counting, top-K rankings, and the duplicate-suppressed
//! malicious endpoint listing.

use crate::parser::{Dataset, FlowRecord};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One distinct value of a field with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    pub value: String,
    pub count: u64,
}

/// Occurrences per distinct value of a string field, descending by count,
/// ties broken by first-encountered order in the dataset. Records where the
/// field is null are excluded from the counts.
pub fn value_counts<'a, F>(dataset: &'a Dataset, field: F) -> Vec<ValueCount>
where
    F: Fn(&'a FlowRecord) -> Option<&'a str>,
{
    let mut counts: HashMap<&str, (u64, usize)> = HashMap::new();
    for (idx, record) in dataset.records.iter().enumerate() {
        let Some(value) = field(record) else { continue };
        let entry = counts.entry(value).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, u64, usize)> =
        counts.into_iter().map(|(v, (c, i))| (v, c, i)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked
        .into_iter()
        .map(|(value, count, _)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// The `k` most frequent distinct values of a field with their counts.
/// Ordering and tie-break rules match [`value_counts`].
pub fn top_k<'a, F>(dataset: &'a Dataset, field: F, k: usize) -> Vec<ValueCount>
where
    F: Fn(&'a FlowRecord) -> Option<&'a str>,
{
    let mut ranked = value_counts(dataset, field);
    ranked.truncate(k);
    ranked
}

/// One distinct malicious (source, destination, label) combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointTriple {
    pub src_addr: String,
    pub dst_addr: String,
    pub label: String,
}

/// Distinct (SrcAddr, DstAddr, Label) triples among botnet flows, truncated
/// to the first `limit` in dataset order after duplicate removal.
pub fn malicious_endpoints(dataset: &Dataset, limit: usize) -> Vec<EndpointTriple> {
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut out = Vec::new();
    for record in &dataset.records {
        if !record.is_botnet {
            continue;
        }
        let label = record.label.as_deref().unwrap_or("");
        if seen.insert((record.src_addr.as_str(), record.dst_addr.as_str(), label)) {
            out.push(EndpointTriple {
                src_addr: record.src_addr.clone(),
                dst_addr: record.dst_addr.clone(),
                label: label.to_string(),
            });
            if out.len() == limit {
                break;
            }
        }
    }
    out
}
