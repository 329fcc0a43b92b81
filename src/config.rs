//! Analyzer configuration: aggregation query parameters and logging.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Aggregation query parameters
    pub aggregation: AggregationConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Entries in the source/destination top-talker rankings
    pub top_talkers: usize,
    /// Labels kept in the label distribution
    pub label_top: usize,
    /// Distinct (src, dst, label) triples listed for malicious traffic
    pub malicious_listing: usize,
    /// Equal-width bins per histogram
    pub histogram_bins: usize,
    /// Quantile cut applied before histogram bucketing (0.0-1.0)
    pub outlier_percentile: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            top_talkers: 10,
            label_top: 10,
            malicious_listing: 50,
            histogram_bins: 50,
            outlier_percentile: 0.95,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AnalyzerConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AnalyzerConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
