//! Usage aggregator
//!
//! Sums object count and total size per input argument, or across every
//! bucket of the account when no arguments are given.

use crate::error::Result;
use crate::pager::fetch_page;
use crate::path::{FileUri, Scheme};
use crate::store::ObjectStore;

/// Aggregate usage for one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSummary {
    pub total_size: i64,
    pub objects: i64,
    /// The argument as the user gave it, echoed back in output
    pub argument: String,
}

/// Measure usage for each argument and emit one summary per argument.
///
/// With no arguments, every bucket visible to the account is measured.
/// Arguments that do not name an s3 bucket are skipped silently; this is
/// intentional filtering, not error suppression. Any fetch error aborts the
/// whole run.
pub async fn measure<S, F>(store: &S, args: &[String], mut emit: F) -> Result<()>
where
    S: ObjectStore + ?Sized,
    F: FnMut(&UsageSummary),
{
    let args: Vec<String> = if args.is_empty() {
        store
            .list_buckets()
            .await?
            .into_iter()
            .map(|bucket| format!("s3://{}", bucket.name))
            .collect()
    } else {
        args.to_vec()
    };

    for arg in &args {
        let uri = match FileUri::parse(arg) {
            Ok(uri) if uri.scheme == Scheme::S3 && !uri.bucket.is_empty() => uri,
            _ => continue,
        };

        let mut summary = UsageSummary {
            total_size: 0,
            objects: 0,
            argument: arg.clone(),
        };

        // Non-delimited fetch: every object at any depth lands in the page.
        fetch_page(store, &uri, false, |page| {
            for object in &page.objects {
                summary.total_size += object.size;
                summary.objects += 1;
            }
        })
        .await?;

        emit(&summary);
    }

    Ok(())
}
