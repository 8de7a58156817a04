//! Uniform path model
//!
//! A `FileUri` addresses either a local filesystem path (`file://...` or a
//! bare path) or a remote bucket/key location (`s3://bucket/key`). Values are
//! immutable; `join` and `set_path` derive new instances.

use crate::error::{Error, Result};

/// Addressing scheme of a [`FileUri`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Local filesystem path
    File,
    /// Remote bucket/key path
    S3,
}

/// A parsed scheme-qualified path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUri {
    /// Addressing scheme; defaults to `File` when the input carries none
    pub scheme: Scheme,
    /// Bucket name (empty for local paths)
    pub bucket: String,
    /// Path component; for `S3` this is the object key without a leading `/`,
    /// never empty (`/` stands for the bucket root)
    pub path: String,
}

impl FileUri {
    /// Parse a URI-like string.
    ///
    /// Recognized schemes are `file` (the default for bare paths) and `s3`.
    /// Any other explicit scheme is rejected. The raw path bytes are kept
    /// as-is so object keys round-trip without percent-encoding surprises.
    pub fn parse(raw: &str) -> Result<Self> {
        let (scheme, rest) = match raw.split_once("://") {
            Some(("file", rest)) => (Scheme::File, rest),
            Some(("s3", rest)) => (Scheme::S3, rest),
            Some(_) => return Err(Error::InvalidScheme),
            None => {
                return Ok(Self {
                    scheme: Scheme::File,
                    bucket: String::new(),
                    path: raw.to_string(),
                });
            }
        };

        // The authority part runs up to the first '/', the path from there on.
        let (bucket, mut path) = match rest.find('/') {
            Some(idx) => (rest[..idx].to_string(), rest[idx..].to_string()),
            None => (rest.to_string(), String::new()),
        };

        if scheme == Scheme::S3 {
            if let Some(stripped) = path.strip_prefix('/') {
                path = stripped.to_string();
            }
            if path.is_empty() {
                path = "/".to_string();
            }
        }

        Ok(Self {
            scheme,
            bucket,
            path,
        })
    }

    /// The path as a valid object key, with any leading separator stripped
    pub fn key(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }

    /// Whether the path names the bucket root (no prefix filter applies)
    pub fn is_root(&self) -> bool {
        self.path.is_empty() || self.path == "/"
    }

    /// Directory-join: derive a new URI with `elem` joined against the
    /// *directory* of the current path.
    ///
    /// An empty `elem` copies the current path; an absolute `elem` replaces it
    /// outright. Otherwise the result is a sibling of the current path, with a
    /// trailing separator on `elem` preserved. This is how a worklist prefix
    /// is extended by one segment during a directory walk.
    pub fn join(&self, elem: &str) -> Self {
        let path = if elem.is_empty() {
            self.path.clone()
        } else if elem.starts_with('/') {
            elem.to_string()
        } else {
            let mut joined = clean(&format!("{}/{}", parent(&self.path), elem));
            if elem.ends_with('/') {
                joined.push('/');
            }
            joined
        };

        Self {
            scheme: self.scheme,
            bucket: self.bucket.clone(),
            path,
        }
    }

    /// Derive a new URI with the path component replaced wholesale.
    /// An empty path defaults to `/` for the s3 scheme.
    pub fn set_path(&self, elem: &str) -> Self {
        let path = if elem.is_empty() && self.scheme == Scheme::S3 {
            "/".to_string()
        } else {
            elem.to_string()
        };

        Self {
            scheme: self.scheme,
            bucket: self.bucket.clone(),
            path,
        }
    }
}

impl std::fmt::Display for FileUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scheme {
            Scheme::S3 => write!(f, "s3://{}/{}", self.bucket, self.key()),
            Scheme::File => write!(f, "file://{}", self.path),
        }
    }
}

impl std::str::FromStr for FileUri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Lexically clean a slash-separated path: drop empty and `.` segments and
/// resolve `..` against preceding segments.
fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut out: Vec<&str> = Vec::new();

    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if matches!(out.last(), Some(&s) if s != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
            }
            s => out.push(s),
        }
    }

    let joined = out.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Everything up to the last path element, cleaned; `.` when there is none
fn parent(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => clean(&path[..=idx]),
        None => ".".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_s3_uri() {
        let uri = FileUri::parse("s3://bucket/a/b.txt").unwrap();
        assert_eq!(uri.scheme, Scheme::S3);
        assert_eq!(uri.bucket, "bucket");
        assert_eq!(uri.path, "a/b.txt");
        assert_eq!(uri.key(), "a/b.txt");
    }

    #[test]
    fn test_parse_bare_path_defaults_to_file() {
        let uri = FileUri::parse("some/local/path.txt").unwrap();
        assert_eq!(uri.scheme, Scheme::File);
        assert_eq!(uri.path, "some/local/path.txt");

        let uri = FileUri::parse("/absolute/path").unwrap();
        assert_eq!(uri.scheme, Scheme::File);
        assert_eq!(uri.path, "/absolute/path");
    }

    #[test]
    fn test_parse_file_uri() {
        let uri = FileUri::parse("file:///tmp/x").unwrap();
        assert_eq!(uri.scheme, Scheme::File);
        assert_eq!(uri.path, "/tmp/x");
        assert_eq!(uri.to_string(), "file:///tmp/x");
    }

    #[test]
    fn test_parse_rejects_unknown_scheme() {
        assert!(matches!(
            FileUri::parse("http://example.com/x"),
            Err(Error::InvalidScheme)
        ));
        assert!(matches!(
            FileUri::parse("gs://bucket/key"),
            Err(Error::InvalidScheme)
        ));
    }

    #[test]
    fn test_parse_bucket_only_normalizes_to_root() {
        let uri = FileUri::parse("s3://bucket").unwrap();
        assert_eq!(uri.path, "/");
        assert!(uri.is_root());
        assert_eq!(uri.key(), "");

        let uri = FileUri::parse("s3://bucket/").unwrap();
        assert_eq!(uri.path, "/");
        assert!(uri.is_root());
    }

    #[test]
    fn test_key_strips_leading_separator() {
        let uri = FileUri {
            scheme: Scheme::S3,
            bucket: "b".into(),
            path: "/a/b".into(),
        };
        assert_eq!(uri.key(), "a/b");
        // key() derives, the receiver keeps its path
        assert_eq!(uri.path, "/a/b");
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["s3://bucket/key", "s3://bucket/a/b/c.txt"] {
            let uri = FileUri::parse(raw).unwrap();
            assert_eq!(uri.to_string(), raw);
            assert_eq!(FileUri::parse(&uri.to_string()).unwrap(), uri);
        }
    }

    #[test]
    fn test_join_is_sibling_join() {
        let uri = FileUri::parse("s3://b/x/y").unwrap();
        assert_eq!(uri.join("z").to_string(), "s3://b/x/z");
        assert_eq!(uri.join("z/").to_string(), "s3://b/x/z/");
        assert_eq!(uri.join("/abs").to_string(), "s3://b/abs");
    }

    #[test]
    fn test_join_empty_copies() {
        let uri = FileUri::parse("s3://b/x/y").unwrap();
        let joined = uri.join("");
        assert_eq!(joined.path, "x/y");
        assert_eq!(joined, uri);
    }

    #[test]
    fn test_join_from_single_segment() {
        // The parent of a single segment is the bucket root.
        let uri = FileUri::parse("s3://b/x").unwrap();
        assert_eq!(uri.join("z").to_string(), "s3://b/z");
    }

    #[test]
    fn test_join_cleans_dot_segments() {
        let uri = FileUri::parse("s3://b/x/y").unwrap();
        assert_eq!(uri.join("./z").path, "x/z");
        assert_eq!(uri.join("../z").path, "z");
    }

    #[test]
    fn test_set_path() {
        let uri = FileUri::parse("s3://b/x/y").unwrap();
        let replaced = uri.set_path("other/key");
        assert_eq!(replaced.path, "other/key");
        assert_eq!(replaced.bucket, "b");
        // original untouched
        assert_eq!(uri.path, "x/y");

        let rooted = uri.set_path("");
        assert_eq!(rooted.path, "/");
    }
}
