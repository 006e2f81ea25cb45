//! Test doubles for `BucketSource`.
//!
//! These let handler tests exercise both outcomes of a listing without
//! touching real AWS credentials or the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use common::testkit::StaticBuckets;
//!
//! #[tokio::test]
//! async fn test_lists_fixed_buckets() {
//!     let source = StaticBuckets::new(["alpha", "beta"]);
//!     let names = source.list_buckets().await.unwrap();
//!     assert_eq!(names.len(), 2);
//! }
//! ```

use crate::buckets::{BucketSource, BucketSourceError};

/// Always succeeds with a fixed list of bucket names.
#[derive(Debug, Clone, Default)]
pub struct StaticBuckets {
    names: Vec<String>,
}

impl StaticBuckets {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl BucketSource for StaticBuckets {
    async fn list_buckets(&self) -> Result<Vec<String>, BucketSourceError> {
        Ok(self.names.clone())
    }
}

/// Always fails with a provider error.
#[derive(Debug, Clone)]
pub struct FailingBuckets {
    message: String,
}

impl FailingBuckets {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingBuckets {
    fn default() -> Self {
        Self::new("access denied")
    }
}

#[async_trait::async_trait]
impl BucketSource for FailingBuckets {
    async fn list_buckets(&self) -> Result<Vec<String>, BucketSourceError> {
        Err(BucketSourceError::Provider(self.message.clone()))
    }
}
