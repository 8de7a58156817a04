//! Per-bucket endpoint resolution
//!
//! Buckets live in exactly one region. Unless a custom virtual-hosted-style
//! bucket pattern makes the endpoint unambiguous, the service itself is asked
//! where a bucket lives before listing against it.

use s9_core::{Error, Result};

use crate::client::{build_client, S3Store};

impl S3Store {
    /// Resolve the client to use for `bucket`.
    ///
    /// Without a custom host-bucket pattern, a location-discovery call is
    /// issued with the default-region client. An empty location constraint
    /// means the default client is already correct and is reused. Otherwise a
    /// fresh client is constructed; the discovered region is deliberately not
    /// applied to it, so the client stays bound to the default region (see
    /// DESIGN.md).
    ///
    /// Discovery errors propagate unmodified and are fatal to the enclosing
    /// command. Resolution is referentially transparent per bucket, so
    /// callers may memoize the result without changing behavior.
    pub async fn client_for_bucket(&self, bucket: &str) -> Result<aws_sdk_s3::Client> {
        if self.config.has_custom_host_bucket() {
            return Ok(self.client.clone());
        }

        let location = self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| Error::Service(e.to_string()))?;

        let constraint = location
            .location_constraint()
            .map(|c| c.as_str().to_string())
            .unwrap_or_default();

        if constraint.is_empty() {
            // The default service endpoint is authoritative for this bucket.
            return Ok(self.client.clone());
        }

        tracing::debug!(bucket, region = %constraint, "bucket reports a non-default location");
        Ok(build_client(&self.config).await)
    }
}
