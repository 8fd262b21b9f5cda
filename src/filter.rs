//! The decode-filter-emit loop over an ndjson buffer.

use std::io::Write;

use tracing::warn;

use crate::decoder::RecordDecoder;
use crate::error::FilterError;
use crate::predicate::PredicateSet;

/// Counters for one filtering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Records decoded from the input buffer.
    pub decoded: usize,
    /// Records that matched every configured condition.
    pub matched: usize,
    /// Matching records dropped because they failed to re-encode.
    pub skipped: usize,
}

/// Decode every record in `input`, evaluate `predicates`, and write each
/// match to `output` as one JSON line.
///
/// Matches are emitted in input order as soon as they are found. A decode
/// failure aborts the whole run; records already emitted stay emitted, but
/// nothing past the corruption is processed. A record that fails to
/// re-encode is logged and dropped while the run continues; a sink write
/// failure aborts.
pub fn filter_records<W: Write>(
    input: &[u8],
    predicates: &PredicateSet,
    output: &mut W,
) -> Result<FilterStats, FilterError> {
    let mut stats = FilterStats::default();

    for record in RecordDecoder::new(input) {
        let record = record?;
        stats.decoded += 1;

        if !predicates.matches(&record) {
            continue;
        }
        stats.matched += 1;

        match serde_json::to_string(&record) {
            Ok(line) => {
                output.write_all(line.as_bytes())?;
                output.write_all(b"\n")?;
            }
            Err(err) => {
                stats.skipped += 1;
                warn!(id = record.id, error = %err, "dropping record that failed to re-encode");
            }
        }
    }

    Ok(stats)
}
