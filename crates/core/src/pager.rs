//! Page fetcher
//!
//! Issues a single bounded listing request against one bucket/prefix and
//! hands the raw page to a caller-supplied consumer. The fetcher performs
//! exactly one service call; following continuation tokens past the first
//! page is a caller concern and no current caller does so.

use futures::StreamExt;

use crate::error::{Error, Result};
use crate::path::{FileUri, Scheme};
use crate::store::{ObjectRecord, ObjectStore, Page, PageRequest, MAX_KEYS_PER_PAGE};

/// Fetch one listing page for `uri` and pass it to `consume` exactly once.
///
/// The prefix filter is omitted when the path names the bucket root; when
/// `use_delimiter` is set, results are grouped one level deep by `/`.
/// Non-s3 URIs are rejected before any service call is made.
pub async fn fetch_page<S, F>(store: &S, uri: &FileUri, use_delimiter: bool, consume: F) -> Result<()>
where
    S: ObjectStore + ?Sized,
    F: FnOnce(&Page),
{
    if uri.scheme != Scheme::S3 || uri.bucket.is_empty() {
        return Err(Error::SchemeMismatch);
    }

    let request = PageRequest {
        bucket: uri.bucket.clone(),
        prefix: if uri.is_root() {
            None
        } else {
            Some(uri.key().to_string())
        },
        delimiter: use_delimiter.then(|| "/".to_string()),
        max_keys: MAX_KEYS_PER_PAGE,
    };

    tracing::debug!(bucket = %request.bucket, prefix = ?request.prefix, "fetching listing page");

    let page = store.list_page(&request).await?;
    consume(&page);
    Ok(())
}

/// Collect object records across several URIs.
///
/// Per-argument fetches run concurrently, bounded by `parallelism`, while
/// this task merges the batches sequentially as they complete; the first
/// error aborts the collection. Record order across arguments therefore
/// follows completion order, not argument order.
pub async fn collect_objects<S>(
    store: &S,
    args: &[String],
    parallelism: usize,
) -> Result<Vec<ObjectRecord>>
where
    S: ObjectStore + ?Sized,
{
    let mut batches = futures::stream::iter(args.iter().map(|arg| async move {
        let uri = FileUri::parse(arg)?;
        let mut records = Vec::new();
        fetch_page(store, &uri, false, |page| {
            records.extend(page.objects.iter().map(ObjectRecord::from));
        })
        .await?;
        Ok::<_, Error>(records)
    }))
    .buffer_unordered(parallelism.max(1));

    let mut result = Vec::new();
    while let Some(batch) = batches.next().await {
        result.extend(batch?);
    }
    Ok(result)
}
