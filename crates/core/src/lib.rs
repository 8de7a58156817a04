//! s9-core: Core library for the s9cmd S3 CLI client
//!
//! This crate provides the core functionality for the s9 CLI, including:
//! - The uniform path model (`file://`, `s3://`, bare paths)
//! - Connection configuration
//! - The ObjectStore trait for listing operations
//! - The page fetcher, listing walker, and usage aggregator
//!
//! This crate is independent of any specific S3 SDK, allowing the listing
//! and usage engines to be tested against in-memory stores.

pub mod config;
pub mod error;
pub mod pager;
pub mod path;
pub mod store;
pub mod usage;
pub mod walk;

pub use config::{ConfigManager, ConnectionConfig, FileConfig};
pub use error::{Error, Result};
pub use pager::{collect_objects, fetch_page};
pub use path::{FileUri, Scheme};
pub use store::{
    BucketEntry, ObjectEntry, ObjectRecord, ObjectStore, Page, PageRequest, MAX_KEYS_PER_PAGE,
};
pub use usage::{measure, UsageSummary};
pub use walk::{walk, ListEntry};

/// Timestamp format used for all user-facing listing output
pub const DATE_FMT: &str = "%Y-%m-%d %H:%M";
