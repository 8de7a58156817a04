//! ObjectStore trait definition
//!
//! This trait is the seam between the listing/usage engines and the storage
//! service SDK. It is implemented by the s9-s3 adapter and by in-memory fakes
//! in tests.

use async_trait::async_trait;

use crate::error::Result;

/// Upper bound on entries returned by a single listing request
pub const MAX_KEYS_PER_PAGE: i32 = 1000;

/// One bucket known to the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketEntry {
    pub name: String,
    pub created: Option<jiff::Timestamp>,
}

/// One object entry within a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub key: String,
    pub size: i64,
    pub etag: String,
    pub last_modified: Option<jiff::Timestamp>,
}

/// One listed object, carried across listings.
///
/// `source_tag` is reserved for cross-listing correlation (a future sync
/// comparison) and is not consulted by listing or usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub name: String,
    pub size: i64,
    pub checksum: String,
    pub source_tag: i64,
}

impl From<&ObjectEntry> for ObjectRecord {
    fn from(entry: &ObjectEntry) -> Self {
        Self {
            name: entry.key.clone(),
            size: entry.size,
            checksum: entry.etag.clone(),
            source_tag: 0,
        }
    }
}

/// A single bounded listing request against one bucket/prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub bucket: String,
    /// Prefix filter; omitted when listing from the bucket root
    pub prefix: Option<String>,
    /// Grouping delimiter; set to `/` for one-level listings
    pub delimiter: Option<String>,
    pub max_keys: i32,
}

/// The result of one bounded listing request: synthetic directory entries
/// plus direct object entries, in the order returned by the service
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub common_prefixes: Vec<String>,
    pub objects: Vec<ObjectEntry>,
}

/// Storage service operations needed by the listing and usage engines
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Enumerate every bucket visible to the account
    async fn list_buckets(&self) -> Result<Vec<BucketEntry>>;

    /// Issue one bounded listing request and return the raw page.
    ///
    /// Implementations issue exactly one service call; continuation beyond
    /// `max_keys` entries is the caller's concern.
    async fn list_page(&self, request: &PageRequest) -> Result<Page>;
}
