//! flowscope — descriptive analytics for CTU-13 binetflow botnet captures.
//!
//! Modular structure:
//! - [`parser`] — Binetflow record parsing into an ordered dataset
//! - [`classify`] — Label-derived botnet classification
//! - [`aggregate`] — Distributions, rankings, crosstabs, histograms
//! - [`insights`] — Derived scalar summaries and behavior profiles
//! - [`cache`] — Single-entry session dataset cache
//! - [`report`] — One-call analysis bundle for the presentation layer
//! - [`logging`] — Structured JSON logging

pub mod aggregate;
pub mod cache;
pub mod classify;
pub mod config;
pub mod error;
pub mod insights;
pub mod logging;
pub mod parser;
pub mod report;

pub use cache::DatasetCache;
pub use config::AnalyzerConfig;
pub use error::LoadError;
pub use logging::StructuredLogger;
pub use parser::{BinetflowReader, Dataset, FlowRecord};
pub use report::AnalysisReport;
