//! Listing walker
//!
//! Drives the page fetcher breadth-first over a FIFO worklist of prefixes.
//! Non-recursive walks emit common prefixes as directory entries; recursive
//! walks enqueue them instead, descending one directory level per fetch.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::pager::fetch_page;
use crate::path::{FileUri, Scheme};
use crate::store::ObjectStore;

/// One entry emitted during a listing walk, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    /// A logical subdirectory (common prefix)
    Dir { uri: String },
    /// A direct object entry
    Object {
        uri: String,
        size: i64,
        last_modified: Option<jiff::Timestamp>,
    },
}

/// Walk `uri` and emit entries in worklist (FIFO) order.
///
/// Objects are emitted in the order the service returns them within each
/// page. A fetch error aborts the walk immediately; entries already emitted
/// stand.
pub async fn walk<S, F>(store: &S, uri: &FileUri, recursive: bool, mut emit: F) -> Result<()>
where
    S: ObjectStore + ?Sized,
    F: FnMut(ListEntry),
{
    if uri.scheme != Scheme::S3 || uri.bucket.is_empty() {
        return Err(Error::SchemeMismatch);
    }

    let mut todo: VecDeque<FileUri> = VecDeque::from([uri.clone()]);

    while let Some(item) = todo.pop_front() {
        fetch_page(store, &item, true, |page| {
            for prefix in &page.common_prefixes {
                let child = item.set_path(prefix);
                if recursive {
                    todo.push_back(child);
                } else {
                    emit(ListEntry::Dir {
                        uri: child.to_string(),
                    });
                }
            }
            for object in &page.objects {
                emit(ListEntry::Object {
                    uri: format!("s3://{}/{}", item.bucket, object.key),
                    size: object.size,
                    last_modified: object.last_modified,
                });
            }
        })
        .await?;
    }

    Ok(())
}
