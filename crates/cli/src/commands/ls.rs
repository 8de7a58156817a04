//! ls command - List buckets and objects
//!
//! With no arguments, lists every bucket visible to the account. With
//! arguments, walks each bucket/prefix one directory level at a time,
//! printing directory entries and objects in fixed-width columns.

use clap::Args;

use s9_core::{walk, ConnectionConfig, Error, FileUri, ListEntry, ObjectStore, Scheme, DATE_FMT};
use s9_s3::S3Store;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List buckets and objects
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Remote paths (s3://bucket[/prefix]); empty lists all buckets
    pub paths: Vec<String>,
}

/// Execute the ls command
pub async fn execute(args: LsArgs, config: ConnectionConfig, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    // Validate every argument before touching the network.
    let uris = match parse_uris(&args.paths) {
        Ok(uris) => uris,
        Err(e) => {
            formatter.error(&format!("ls {e}"));
            return ExitCode::from_error(&e);
        }
    };

    let store = S3Store::connect(config.clone()).await;

    if uris.is_empty() {
        return list_buckets(&store, &formatter).await;
    }

    for uri in &uris {
        let result = walk(&store, uri, config.recursive, |entry| match entry {
            ListEntry::Dir { uri } => {
                formatter.println(&format!("{:>16} {:>9}   {uri}", "", "DIR"));
            }
            ListEntry::Object {
                uri,
                size,
                last_modified,
            } => {
                let date = last_modified
                    .map(|ts| ts.strftime(DATE_FMT).to_string())
                    .unwrap_or_default();
                formatter.println(&format!("{date:>16} {size:>9}   {uri}"));
            }
        })
        .await;

        if let Err(e) = result {
            formatter.error(&format!("ls {e}"));
            return ExitCode::from_error(&e);
        }
    }

    ExitCode::Success
}

async fn list_buckets(store: &S3Store, formatter: &Formatter) -> ExitCode {
    match store.list_buckets().await {
        Ok(buckets) => {
            for bucket in &buckets {
                let date = bucket
                    .created
                    .map(|ts| ts.strftime(DATE_FMT).to_string())
                    .unwrap_or_else(|| " ".repeat(16));
                formatter.println(&format!("{date}  s3://{}", bucket.name));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("ls {e}"));
            ExitCode::from_error(&e)
        }
    }
}

/// Parse and validate listing arguments; every path must name an s3 bucket
fn parse_uris(paths: &[String]) -> s9_core::Result<Vec<FileUri>> {
    paths
        .iter()
        .map(|path| match FileUri::parse(path) {
            Ok(uri) if uri.scheme == Scheme::S3 && !uri.bucket.is_empty() => Ok(uri),
            Ok(_) => Err(Error::SchemeMismatch),
            Err(e) => Err(e),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uris_accepts_s3_paths() {
        let paths = vec!["s3://bucket".to_string(), "s3://other/prefix/".to_string()];
        let uris = parse_uris(&paths).unwrap();
        assert_eq!(uris.len(), 2);
        assert_eq!(uris[0].bucket, "bucket");
        assert_eq!(uris[1].key(), "prefix/");
    }

    #[test]
    fn test_parse_uris_rejects_local_paths() {
        let paths = vec!["s3://bucket".to_string(), "/tmp/local".to_string()];
        assert!(matches!(parse_uris(&paths), Err(Error::SchemeMismatch)));
    }

    #[test]
    fn test_parse_uris_rejects_file_scheme() {
        let paths = vec!["file:///tmp/x".to_string()];
        assert!(matches!(parse_uris(&paths), Err(Error::SchemeMismatch)));
    }

    #[test]
    fn test_parse_uris_rejects_bucketless_s3() {
        let paths = vec!["s3://".to_string()];
        assert!(matches!(parse_uris(&paths), Err(Error::SchemeMismatch)));
    }
}
