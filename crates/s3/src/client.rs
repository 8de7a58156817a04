//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from s9-core.

use async_trait::async_trait;

use s9_core::{
    BucketEntry, ConnectionConfig, Error, ObjectEntry, ObjectStore, Page, PageRequest, Result,
};

/// Region used when none is discoverable for a bucket
pub const DEFAULT_REGION: &str = "ap-southeast-1";

/// S3 client wrapper holding the default-region client and the connection
/// settings it was built from. The handle is immutable after construction
/// and safe to share across concurrent fetches within a command.
pub struct S3Store {
    pub(crate) config: ConnectionConfig,
    pub(crate) client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Build a store bound to the default region, with the configured host
    /// base (if any) overriding the default service endpoint
    pub async fn connect(config: ConnectionConfig) -> Self {
        let client = build_client(&config).await;
        Self { config, client }
    }

    /// Get the default-region aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Build the default-region client for the given connection settings
pub(crate) async fn build_client(config: &ConnectionConfig) -> aws_sdk_s3::Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(DEFAULT_REGION));

    // Static credentials when both halves are configured; otherwise the SDK
    // falls back to its environment-based provider chain.
    if !config.access_key.is_empty() && !config.secret_key.is_empty() {
        loader = loader.credentials_provider(aws_credential_types::Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "s9cmd-static-credentials",
        ));
    }

    let sdk_config = loader.load().await;
    let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);

    if config.has_custom_host_base() {
        // Custom endpoints are typically non-AWS deployments where
        // virtual-hosted addressing does not resolve.
        builder = builder
            .endpoint_url(endpoint_url(&config.host_base))
            .force_path_style(true);
    }

    aws_sdk_s3::Client::from_conf(builder.build())
}

/// Turn a bare hostname into an endpoint URL, defaulting to https
pub(crate) fn endpoint_url(host: &str) -> String {
    if host.starts_with("http") {
        host.to_string()
    } else {
        format!("https://{host}")
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn list_buckets(&self) -> Result<Vec<BucketEntry>> {
        let response = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|e| Error::Service(e.to_string()))?;

        Ok(response
            .buckets()
            .iter()
            .map(|bucket| BucketEntry {
                name: bucket.name().unwrap_or_default().to_string(),
                created: bucket
                    .creation_date()
                    .and_then(|date| jiff::Timestamp::from_second(date.secs()).ok()),
            })
            .collect())
    }

    async fn list_page(&self, request: &PageRequest) -> Result<Page> {
        let client = self.client_for_bucket(&request.bucket).await?;

        let mut req = client
            .list_objects_v2()
            .bucket(&request.bucket)
            .max_keys(request.max_keys);

        if let Some(prefix) = &request.prefix {
            req = req.prefix(prefix);
        }
        if let Some(delimiter) = &request.delimiter {
            req = req.delimiter(delimiter);
        }

        let response = req
            .send()
            .await
            .map_err(|e| Error::Service(e.to_string()))?;

        let common_prefixes = response
            .common_prefixes()
            .iter()
            .filter_map(|p| p.prefix().map(str::to_string))
            .collect();

        let objects = response
            .contents()
            .iter()
            .map(|object| ObjectEntry {
                key: object.key().unwrap_or_default().to_string(),
                size: object.size().unwrap_or(0),
                etag: object
                    .e_tag()
                    .unwrap_or_default()
                    .trim_matches('"')
                    .to_string(),
                last_modified: object
                    .last_modified()
                    .and_then(|modified| jiff::Timestamp::from_second(modified.secs()).ok()),
            })
            .collect();

        Ok(Page {
            common_prefixes,
            objects,
        })
    }
}
