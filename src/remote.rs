//! Retrieval of the source object from S3.

use aws_config::BehaviorVersion;
use tracing::debug;

use crate::error::FetchError;

/// Bucket and key parsed from an `s3://{bucket}/{key}` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUri {
    pub bucket: String,
    pub key: String,
}

impl ObjectUri {
    /// Parse an `s3://{bucket}/{key}` URI. The key may contain slashes.
    pub fn parse(uri: &str) -> Result<Self, FetchError> {
        let invalid = || FetchError::InvalidUri {
            uri: uri.to_string(),
        };

        let rest = uri.strip_prefix("s3://").ok_or_else(invalid)?;
        match rest.split_once('/') {
            Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => Ok(ObjectUri {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for ObjectUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Download the object into memory.
///
/// Region and credentials come from the environment via the default
/// provider chain (`AWS_REGION`, `AWS_ACCESS_KEY_ID`, ...).
pub async fn fetch_object(uri: &ObjectUri) -> Result<Vec<u8>, FetchError> {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = aws_sdk_s3::Client::new(&config);

    let download_err = |source: Box<dyn std::error::Error + Send + Sync>| FetchError::Download {
        bucket: uri.bucket.clone(),
        key: uri.key.clone(),
        source,
    };

    let response = client
        .get_object()
        .bucket(&uri.bucket)
        .key(&uri.key)
        .send()
        .await
        .map_err(|e| download_err(Box::new(e)))?;

    let body = response
        .body
        .collect()
        .await
        .map_err(|e| download_err(Box::new(e)))?;

    let bytes = body.into_bytes().to_vec();
    debug!(bucket = %uri.bucket, key = %uri.key, bytes = bytes.len(), "downloaded source object");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_and_key() {
        let uri = ObjectUri::parse("s3://maf-sample-data/1k.ndjson.gz").unwrap();

        assert_eq!(uri.bucket, "maf-sample-data");
        assert_eq!(uri.key, "1k.ndjson.gz");
    }

    #[test]
    fn test_parse_nested_key() {
        let uri = ObjectUri::parse("s3://bucket/path/to/data.ndjson.gz").unwrap();

        assert_eq!(uri.bucket, "bucket");
        assert_eq!(uri.key, "path/to/data.ndjson.gz");
    }

    #[test]
    fn test_display_round_trips() {
        let uri = ObjectUri::parse("s3://bucket/a/b.gz").unwrap();

        assert_eq!(uri.to_string(), "s3://bucket/a/b.gz");
    }

    #[test]
    fn test_wrong_scheme_is_rejected() {
        assert!(ObjectUri::parse("https://bucket/key").is_err());
        assert!(ObjectUri::parse("bucket/key").is_err());
    }

    #[test]
    fn test_missing_key_is_rejected() {
        assert!(ObjectUri::parse("s3://bucket").is_err());
        assert!(ObjectUri::parse("s3://bucket/").is_err());
    }

    #[test]
    fn test_missing_bucket_is_rejected() {
        assert!(ObjectUri::parse("s3:///key").is_err());
        assert!(ObjectUri::parse("s3://").is_err());
    }
}
