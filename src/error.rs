//! Error types for fetching, decompressing, decoding, and filtering.

use thiserror::Error;

/// Malformed JSON encountered mid-stream.
///
/// Distinct from clean end-of-stream: the decoder hit bytes it could not
/// parse as a record before the buffer was exhausted.
#[derive(Debug, Error)]
#[error("malformed record at byte offset {offset}")]
pub struct DecodeError {
    /// Byte offset into the input buffer at which decoding failed.
    pub offset: usize,
    #[source]
    pub source: serde_json::Error,
}

/// Gzip decompression failure.
#[derive(Debug, Error)]
#[error("gzip decompression failed")]
pub struct DecompressError(#[from] pub std::io::Error);

/// Failure to locate or download the source object.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The `--input` value is not an `s3://{bucket}/{key}` URI.
    #[error("invalid S3 URI {uri:?}: expected s3://{{bucket}}/{{key}}")]
    InvalidUri { uri: String },

    /// The download itself failed (credentials, network, missing object).
    #[error("failed to download s3://{bucket}/{key}")]
    Download {
        bucket: String,
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Failure of a decode-filter-emit run.
///
/// A decode error aborts the run, as does a sink write failure. Per-record
/// encode failures are not represented here: those drop the record and the
/// run continues.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to write to output sink")]
    Io(#[from] std::io::Error),
}
