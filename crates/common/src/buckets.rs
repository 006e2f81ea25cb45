use aws_sdk_s3::error::DisplayErrorContext;

/// Source of truth for bucket names. Every request lists fresh;
/// implementations must not cache.
#[async_trait::async_trait]
pub trait BucketSource: Send + Sync {
    async fn list_buckets(&self) -> Result<Vec<String>, BucketSourceError>;
}

/// `BucketSource` backed by the AWS S3 API.
///
/// The inner client is cheap to clone and holds its own connection pool,
/// so one `S3BucketSource` is built per process and shared.
#[derive(Debug, Clone)]
pub struct S3BucketSource {
    client: aws_sdk_s3::Client,
}

impl S3BucketSource {
    /// Build a source from the default AWS config chain
    /// (env vars, shared credentials file, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
        }
    }
}

#[async_trait::async_trait]
impl BucketSource for S3BucketSource {
    async fn list_buckets(&self) -> Result<Vec<String>, BucketSourceError> {
        let output = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| BucketSourceError::Provider(DisplayErrorContext(&e).to_string()))?;

        // Buckets without a name shouldn't happen; skip them rather than fail
        let names = output
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect();

        Ok(names)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BucketSourceError {
    #[error("storage provider error: {0}")]
    Provider(String),
}
