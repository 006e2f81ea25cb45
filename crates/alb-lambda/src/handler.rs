use aws_lambda_events::alb::{AlbTargetGroupRequest, AlbTargetGroupResponse};
use aws_lambda_events::encodings::Body;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue};
use lambda_runtime::{Error, LambdaEvent};

use common::prelude::BucketSource;

/// Handle one ALB invocation: list buckets, report the count as HTML.
///
/// A listing failure propagates through `?` as an unhandled invocation
/// error rather than a 5xx body.
pub async fn handler(
    _event: LambdaEvent<AlbTargetGroupRequest>,
    buckets: &dyn BucketSource,
) -> Result<AlbTargetGroupResponse, Error> {
    tracing::info!("Serving lambda request.");

    let names = buckets.list_buckets().await?;

    let message = format!("(Rust) Hello lambda - found {} buckets.", names.len());

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));

    Ok(AlbTargetGroupResponse {
        status_code: 200,
        status_description: None,
        headers,
        multi_value_headers: HeaderMap::new(),
        body: Some(Body::Text(format!(
            "<html><body><h1>{}</h1></body></html>",
            message
        ))),
        is_base64_encoded: false,
    })
}

#[cfg(test)]
mod tests {
    use lambda_runtime::Context;

    use common::testkit::{FailingBuckets, StaticBuckets};

    use super::*;

    fn alb_event() -> LambdaEvent<AlbTargetGroupRequest> {
        let request: AlbTargetGroupRequest = serde_json::from_value(serde_json::json!({
            "requestContext": {
                "elb": {
                    "targetGroupArn": "arn:aws:elasticloadbalancing:us-east-1:123456789012:targetgroup/sample/abc"
                }
            },
            "httpMethod": "GET",
            "path": "/",
            "queryStringParameters": {},
            "headers": {},
            "body": "",
            "isBase64Encoded": false
        }))
        .unwrap();
        LambdaEvent::new(request, Context::default())
    }

    #[tokio::test]
    async fn test_body_reports_bucket_count() {
        let buckets = StaticBuckets::new(["alpha", "beta", "gamma"]);
        let response = handler(alb_event(), &buckets).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers.get(CONTENT_TYPE).unwrap(), "text/html");
        assert!(!response.is_base64_encoded);
        match response.body.unwrap() {
            Body::Text(body) => {
                assert!(body.contains("found 3 buckets."));
            }
            other => panic!("expected text body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_list_reports_zero() {
        let buckets = StaticBuckets::default();
        let response = handler(alb_event(), &buckets).await.unwrap();

        match response.body.unwrap() {
            Body::Text(body) => assert!(body.contains("found 0 buckets.")),
            other => panic!("expected text body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_listing_error_propagates() {
        let buckets = FailingBuckets::new("no credentials");
        let result = handler(alb_event(), &buckets).await;

        assert!(result.is_err());
    }
}
