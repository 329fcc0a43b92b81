//! Outlier-trimmed equal-width histograms for numeric flow fields.

use crate::parser::{Dataset, FlowRecord};
use serde::{Deserialize, Serialize};

/// Equal-width histogram over the values retained after the percentile cut.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Inclusive lower bound of the first bin.
    pub min: f64,
    /// Width of each bin; 0.0 when the retained range is degenerate.
    pub bin_width: f64,
    pub counts: Vec<u64>,
    /// Number of values retained after the percentile cut.
    pub retained: usize,
}

impl Histogram {
    fn empty(bins: usize) -> Self {
        Self {
            min: 0.0,
            bin_width: 0.0,
            counts: vec![0; bins],
            retained: 0,
        }
    }
}

/// Linear-interpolation percentile over a set of values; `q` in [0, 1].
/// `None` when no values are present.
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Bucket a numeric field into `bins` equal-width bins after discarding
/// values above the `q` percentile of the full dataset. The boundary is
/// inclusive: values equal to the cut are retained. Records where the field
/// is null are excluded; an empty dataset yields an all-zero histogram.
pub fn outlier_trimmed_histogram<F>(dataset: &Dataset, field: F, q: f64, bins: usize) -> Histogram
where
    F: Fn(&FlowRecord) -> Option<f64>,
{
    let bins = bins.max(1);
    let values: Vec<f64> = dataset.records.iter().filter_map(&field).collect();
    let Some(cut) = percentile(&values, q) else {
        return Histogram::empty(bins);
    };
    let kept: Vec<f64> = values.into_iter().filter(|v| *v <= cut).collect();
    if kept.is_empty() {
        return Histogram::empty(bins);
    }

    let min = kept.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = kept.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut counts = vec![0u64; bins];

    if max > min {
        let width = (max - min) / bins as f64;
        for v in &kept {
            // The max value itself lands in the last bin.
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        Histogram {
            min,
            bin_width: width,
            counts,
            retained: kept.len(),
        }
    } else {
        // Degenerate range: every value identical, one populated bin.
        counts[0] = kept.len() as u64;
        Histogram {
            min,
            bin_width: 0.0,
            counts,
            retained: kept.len(),
        }
    }
}
