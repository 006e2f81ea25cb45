/**
 * Bucket-listing abstraction shared by every sample app.
 *  - `BucketSource` trait over "enumerate the storage buckets"
 *  - `S3BucketSource`, the real AWS-backed implementation
 */
pub mod buckets;
/**
 * Lightweight test doubles for `BucketSource`, used by the
 *  handler tests in each app crate.
 */
pub mod testkit;
/**
 * Helper for setting build version information
 *  at compile time.
 */
pub mod version;

pub mod prelude {
    pub use crate::buckets::{BucketSource, BucketSourceError, S3BucketSource};
    pub use crate::version::{build_info, report_build_info};
}
