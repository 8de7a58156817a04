//! Integration tests for the s9 CLI
//!
//! The offline tests below run the real binary but never reach the network:
//! they cover argument validation, placeholder verbs, and exit codes.
//!
//! The tests in the `server` module require a running S3-compatible server:
//! ```bash
//! docker run -d --name minio -p 9000:9000 \
//!     -e MINIO_ROOT_USER=accesskey \
//!     -e MINIO_ROOT_PASSWORD=secretkey \
//!     minio/minio server /data
//!
//! cargo test --features integration
//! ```

use std::process::{Command, Output};

use tempfile::TempDir;

/// Run the s9 binary with an isolated config directory
fn run_s9(args: &[&str], config_dir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_s9"))
        .args(args)
        .env("S9_CONFIG_DIR", config_dir)
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .output()
        .expect("failed to execute s9")
}

#[test]
fn test_ls_rejects_file_scheme_without_network() {
    let config_dir = TempDir::new().unwrap();
    let output = run_s9(&["ls", "file:///tmp/x"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("requires objects to be prefixed with s3://"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn test_ls_rejects_bare_local_path() {
    let config_dir = TempDir::new().unwrap();
    let output = run_s9(&["ls", "/tmp/x"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_ls_rejects_unknown_scheme() {
    let config_dir = TempDir::new().unwrap();
    let output = run_s9(&["ls", "ftp://host/path"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_du_skips_local_arguments_silently() {
    let config_dir = TempDir::new().unwrap();
    let output = run_s9(&["du", "/tmp", "file:///x"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_stub_verbs_exit_successfully() {
    let config_dir = TempDir::new().unwrap();
    for verb in [
        "cp", "mv", "sync", "get", "put", "policy", "multipart", "mkdir", "rm", "chmod", "chown",
        "unlink",
    ] {
        let output = run_s9(&[verb, "a", "b"], config_dir.path());
        assert_eq!(output.status.code(), Some(0), "verb {verb} failed");
        assert!(output.stdout.is_empty(), "verb {verb} produced output");
    }
}

#[test]
fn test_unknown_verb_is_a_usage_error() {
    let config_dir = TempDir::new().unwrap();
    let output = run_s9(&["frobnicate"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_config_file_is_reported() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(config_dir.path().join("config.toml"), "access_key = [").unwrap();

    let output = run_s9(&["du", "/tmp"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[cfg(feature = "integration")]
mod server {
    use super::*;

    const HOST_BASE: &str = "http://127.0.0.1:9000";

    fn server_config_dir() -> TempDir {
        let config_dir = TempDir::new().unwrap();
        std::fs::write(
            config_dir.path().join("config.toml"),
            format!(
                r#"
                access_key = "accesskey"
                secret_key = "secretkey"
                host_base = "{HOST_BASE}"
                "#
            ),
        )
        .unwrap();
        config_dir
    }

    #[test]
    fn test_ls_lists_buckets() {
        let config_dir = server_config_dir();
        let output = run_s9(&["ls"], config_dir.path());

        assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            assert!(line.contains("s3://"), "unexpected line: {line}");
        }
    }

    #[test]
    fn test_du_reports_objects_per_argument() {
        let config_dir = server_config_dir();
        let output = run_s9(&["du"], config_dir.path());

        assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            assert!(line.contains(" objects s3://"), "unexpected line: {line}");
        }
    }

    #[test]
    fn test_ls_missing_bucket_is_a_service_error() {
        let config_dir = server_config_dir();
        let output = run_s9(&["ls", "s3://no-such-bucket-s9-test"], config_dir.path());

        assert_eq!(output.status.code(), Some(3));
    }
}
