//! CSV ingestion for the binetflow format. Only an unreadable source is
//! fatal; malformed rows and fields degrade to null sentinels locally.

use super::{Dataset, FlowRecord};
use crate::error::LoadError;
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::{debug, warn};

/// Timestamp layout used by the CTU-13 captures, e.g. `2011/08/10 10:01:31.123456`.
const START_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.f";

pub struct BinetflowReader;

impl BinetflowReader {
    /// Load a binetflow file into a [`Dataset`]. The first row is always
    /// discarded as a header, whatever it contains; every following row is
    /// mapped positionally onto the fixed schema.
    pub fn load(path: &Path) -> Result<Dataset, LoadError> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows = reader.records();
        // A failure this early means the source itself is unreadable.
        if let Some(header) = rows.next() {
            header?;
        }

        let mut records = Vec::new();
        let mut undecodable = 0usize;
        for row in rows {
            match row {
                Ok(r) => records.push(Self::coerce(&r)),
                Err(e) => {
                    undecodable += 1;
                    debug!(error = %e, "skipped undecodable row");
                }
            }
        }
        if undecodable > 0 {
            warn!(undecodable, "rows could not be decoded");
        }
        debug!(rows = records.len(), path = %path.display(), "binetflow parsed");
        Ok(Dataset::new(records))
    }

    /// Map one positional row onto the schema. Missing trailing fields read
    /// as empty; malformed numeric values and timestamps become `None`.
    fn coerce(row: &csv::StringRecord) -> FlowRecord {
        let field = |i: usize| row.get(i).unwrap_or("").trim();
        let text = |i: usize| field(i).to_string();
        let opt_text = |i: usize| {
            let v = field(i);
            (!v.is_empty()).then(|| v.to_string())
        };

        FlowRecord {
            start_time: NaiveDateTime::parse_from_str(field(0), START_TIME_FORMAT).ok(),
            dur: field(1).parse().ok(),
            proto: text(2),
            src_addr: text(3),
            sport: text(4),
            dir: text(5),
            dst_addr: text(6),
            dport: text(7),
            state: text(8),
            s_tos: field(9).parse().ok(),
            d_tos: field(10).parse().ok(),
            tot_pkts: field(11).parse().ok(),
            tot_bytes: field(12).parse().ok(),
            src_bytes: field(13).parse().ok(),
            label: opt_text(14),
            is_botnet: false,
        }
    }
}
