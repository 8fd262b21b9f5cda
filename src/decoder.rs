//! Streaming decoder over a buffer of concatenated JSON records.

use serde_json::de::SliceRead;
use serde_json::StreamDeserializer;

use crate::error::DecodeError;
use crate::record::Record;

/// Lazy, forward-only decoder over a byte buffer of whitespace-separated
/// JSON objects.
///
/// The input does not need one record per line; any amount of whitespace
/// between values is accepted, including none. Iteration ends cleanly with
/// `None` once the buffer holds nothing but trailing whitespace, and yields
/// a [`DecodeError`] carrying the byte offset when it hits bytes that do
/// not parse as a record. After an error the decoder is fused.
pub struct RecordDecoder<'de> {
    stream: StreamDeserializer<'de, SliceRead<'de>, Record>,
    failed: bool,
}

impl<'de> RecordDecoder<'de> {
    /// Create a decoder positioned at the start of `input`.
    pub fn new(input: &'de [u8]) -> Self {
        RecordDecoder {
            stream: serde_json::Deserializer::from_slice(input).into_iter(),
            failed: false,
        }
    }

    /// Byte offset of the decoder's cursor into the input buffer.
    pub fn byte_offset(&self) -> usize {
        self.stream.byte_offset()
    }
}

impl Iterator for RecordDecoder<'_> {
    type Item = Result<Record, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.stream.next()? {
            Ok(record) => Some(Ok(record)),
            Err(source) => {
                self.failed = true;
                Some(Err(DecodeError {
                    offset: self.stream.byte_offset(),
                    source,
                }))
            }
        }
    }
}
