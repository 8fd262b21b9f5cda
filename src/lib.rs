//! ndjson-filter - Streaming predicate filter for gzipped ndjson objects in S3
//!
//! This library decodes a buffer of newline-delimited JSON records and streams
//! out the subset matching a set of optional conditions (exact id, inclusive
//! time bounds, word membership). It backs the `ndjson-filter` CLI, which
//! pulls a gzipped object from S3, decompresses it, and filters it in one
//! pass.
//!
//! # Key Features
//!
//! - **Single pass**: each record is decoded, tested, and emitted or dropped
//!   without being retained
//! - **Order preservation**: matches are written in exact input order
//! - **Whitespace-insensitive input**: records may share a line or span
//!   several; any whitespace between values is accepted
//! - **Strict corruption policy**: a malformed record aborts the run rather
//!   than being skipped
//!
//! # Examples
//!
//! Filter by word membership:
//!
//! ```
//! use ndjson_filter::{filter_records, PredicateSet};
//!
//! let input = br#"{"id":1,"time":"2020-01-01T00:00:00Z","words":["a","b"]}
//! {"id":2,"time":"2021-06-01T00:00:00Z","words":["c"]}"#;
//!
//! let predicates = PredicateSet {
//!     word: Some("b".to_string()),
//!     ..PredicateSet::default()
//! };
//!
//! let mut output = Vec::new();
//! let stats = filter_records(input, &predicates, &mut output).unwrap();
//! assert_eq!(stats.matched, 1);
//! assert!(String::from_utf8(output).unwrap().contains("\"id\":1"));
//! ```
//!
//! Filter by time window:
//!
//! ```
//! # use ndjson_filter::{filter_records, PredicateSet};
//! let input = br#"{"id":1,"time":"2020-01-01T00:00:00Z","words":[]}"#;
//!
//! let predicates = PredicateSet {
//!     from_time: Some("2019-01-01T00:00:00Z".parse().unwrap()),
//!     to_time: Some("2021-01-01T00:00:00Z".parse().unwrap()),
//!     ..PredicateSet::default()
//! };
//!
//! let mut output = Vec::new();
//! let stats = filter_records(input, &predicates, &mut output).unwrap();
//! assert_eq!(stats.matched, 1);
//! ```

pub mod decoder;
pub mod decompress;
pub mod error;
pub mod filter;
pub mod predicate;
pub mod record;
pub mod remote;

pub use decoder::RecordDecoder;
pub use decompress::gunzip;
pub use error::{DecodeError, DecompressError, FetchError, FilterError};
pub use filter::{filter_records, FilterStats};
pub use predicate::PredicateSet;
pub use record::Record;
pub use remote::{fetch_object, ObjectUri};
