//! Label-derived botnet classification.

use crate::parser::Dataset;

/// Literal token marking a malicious flow label. Matching is exact-case
/// substring; labels without it, and absent labels, are benign.
pub const BOTNET_TOKEN: &str = "Botnet";

pub fn is_botnet_label(label: Option<&str>) -> bool {
    label.map_or(false, |l| l.contains(BOTNET_TOKEN))
}

/// Stamp `is_botnet` onto every record. Derived purely from the immutable
/// label field, so reapplying is a no-op.
pub fn classify(dataset: &mut Dataset) {
    for record in &mut dataset.records {
        record.is_botnet = is_botnet_label(record.label.as_deref());
    }
}
