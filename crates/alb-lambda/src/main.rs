//! Sample Lambda function for an ALB target group.
//!
//! Always answers 200 with an HTML body reporting the S3 bucket count.
//! Listing errors are not caught here; they propagate to the platform as
//! an invocation failure.

mod handler;

use lambda_runtime::{run, service_fn, Error};

use common::prelude::{report_build_info, S3BucketSource};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    report_build_info();

    // One S3 client per process, reused across invocations
    let buckets = S3BucketSource::from_env().await;

    run(service_fn(|event| handler::handler(event, &buckets))).await
}
