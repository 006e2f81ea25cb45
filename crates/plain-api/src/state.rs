use std::sync::Arc;

use common::prelude::BucketSource;

/// Shared per-process state: just the bucket source.
#[derive(Clone)]
pub struct AppState {
    buckets: Arc<dyn BucketSource>,
}

impl AppState {
    pub fn new(buckets: Arc<dyn BucketSource>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &dyn BucketSource {
        self.buckets.as_ref()
    }
}
