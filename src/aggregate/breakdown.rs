//! Partitioned comparisons: botnet-vs-normal means, the normalized protocol
//! crosstab, and the zero-filled connection-state breakdown.

use crate::parser::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Default)]
struct MeanAcc {
    sum: f64,
    n: u64,
}

impl MeanAcc {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.n += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

/// Arithmetic means of one is_botnet partition; `None` when the partition is
/// empty or the field was null throughout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanStats {
    pub avg_bytes: Option<f64>,
    pub avg_packets: Option<f64>,
    pub avg_duration: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionMeans {
    pub normal: MeanStats,
    pub botnet: MeanStats,
}

/// Mean TotBytes, TotPkts and Dur per is_botnet partition. Null fields are
/// skipped; an empty partition yields `None` means, never zero.
pub fn partition_means(dataset: &Dataset) -> PartitionMeans {
    let mut accs = [
        (MeanAcc::default(), MeanAcc::default(), MeanAcc::default()),
        (MeanAcc::default(), MeanAcc::default(), MeanAcc::default()),
    ];
    for record in &dataset.records {
        let (bytes, pkts, dur) = &mut accs[record.is_botnet as usize];
        bytes.push(record.tot_bytes.map(|v| v as f64));
        pkts.push(record.tot_pkts.map(|v| v as f64));
        dur.push(record.dur);
    }
    let stats = |acc: &(MeanAcc, MeanAcc, MeanAcc)| MeanStats {
        avg_bytes: acc.0.mean(),
        avg_packets: acc.1.mean(),
        avg_duration: acc.2.mean(),
    };
    PartitionMeans {
        normal: stats(&accs[0]),
        botnet: stats(&accs[1]),
    }
}

/// One protocol row of the normalized crosstab. Percentages are of that
/// column's total; `None` when the column is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrosstabRow {
    pub proto: String,
    pub normal_pct: Option<f64>,
    pub botnet_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtoCrosstab {
    pub rows: Vec<CrosstabRow>,
}

/// Proto x is_botnet counts with each is_botnet column independently
/// normalized so its percentages sum to 100. Rows keep first-encountered
/// protocol order.
pub fn proto_crosstab(dataset: &Dataset) -> ProtoCrosstab {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<(String, u64, u64)> = Vec::new();
    let (mut normal_total, mut botnet_total) = (0u64, 0u64);

    for record in &dataset.records {
        let i = match index.get(&record.proto) {
            Some(&i) => i,
            None => {
                rows.push((record.proto.clone(), 0, 0));
                index.insert(record.proto.clone(), rows.len() - 1);
                rows.len() - 1
            }
        };
        if record.is_botnet {
            rows[i].2 += 1;
            botnet_total += 1;
        } else {
            rows[i].1 += 1;
            normal_total += 1;
        }
    }

    let pct = |count: u64, total: u64| (total > 0).then(|| count as f64 * 100.0 / total as f64);
    ProtoCrosstab {
        rows: rows
            .into_iter()
            .map(|(proto, normal, botnet)| CrosstabRow {
                proto,
                normal_pct: pct(normal, normal_total),
                botnet_pct: pct(botnet, botnet_total),
            })
            .collect(),
    }
}

/// One connection-state row; absent combinations read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub state: String,
    pub normal: u64,
    pub botnet: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBreakdown {
    pub rows: Vec<StateCounts>,
}

/// State x is_botnet counts, pivoted so a state seen only on one side still
/// carries an explicit zero on the other. Rows keep first-encountered order.
pub fn state_breakdown(dataset: &Dataset) -> StateBreakdown {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<StateCounts> = Vec::new();

    for record in &dataset.records {
        let i = match index.get(&record.state) {
            Some(&i) => i,
            None => {
                rows.push(StateCounts {
                    state: record.state.clone(),
                    normal: 0,
                    botnet: 0,
                });
                index.insert(record.state.clone(), rows.len() - 1);
                rows.len() - 1
            }
        };
        if record.is_botnet {
            rows[i].botnet += 1;
        } else {
            rows[i].normal += 1;
        }
    }

    StateBreakdown { rows }
}
