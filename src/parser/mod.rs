//! Binetflow record parsing: fixed 15-column positional schema, per-field
//! type coercion with null sentinels for malformed values.

mod binetflow;

pub use binetflow::BinetflowReader;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Column order of the binetflow schema. Positional; header content in the
/// source is ignored.
pub const SCHEMA: [&str; 15] = [
    "StartTime", "Dur", "Proto", "SrcAddr", "Sport", "Dir", "DstAddr", "Dport", "State", "sTos",
    "dTos", "TotPkts", "TotBytes", "SrcBytes", "Label",
];

/// One bidirectional network flow. Numeric fields that failed to parse are
/// `None`; the record itself is always retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowRecord {
    pub start_time: Option<NaiveDateTime>,
    pub dur: Option<f64>,
    pub proto: String,
    pub src_addr: String,
    pub sport: String,
    pub dir: String,
    pub dst_addr: String,
    pub dport: String,
    pub state: String,
    pub s_tos: Option<f64>,
    pub d_tos: Option<f64>,
    pub tot_pkts: Option<u64>,
    pub tot_bytes: Option<u64>,
    pub src_bytes: Option<u64>,
    /// Free-text traffic label; empty input fields read as `None`.
    pub label: Option<String>,
    /// Derived at load time from `label`; see [`crate::classify`].
    pub is_botnet: bool,
}

/// Ordered collection of flows, read-only after classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<FlowRecord>,
}

impl Dataset {
    pub fn new(records: Vec<FlowRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn botnet_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_botnet).count()
    }
}
