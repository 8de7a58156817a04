//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.
//! Connection settings are resolved here, once per invocation, from the
//! config file, the environment, and command-line flags in that order of
//! increasing precedence.

use clap::{Parser, Subcommand};

use s9_core::{ConfigManager, ConnectionConfig};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod du;
mod ls;
mod stub;

/// s9 - S3-compatible object storage CLI
///
/// A command-line interface for S3-compatible object storage services.
#[derive(Parser, Debug)]
#[command(name = "s9")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Access key (overrides config file and environment)
    #[arg(long, global = true, value_name = "KEY")]
    pub access_key: Option<String>,

    /// Secret key (overrides config file and environment)
    #[arg(long, global = true, value_name = "KEY")]
    pub secret_key: Option<String>,

    /// Endpoint host, e.g. minio.example.com:9000
    #[arg(long, global = true, value_name = "HOST")]
    pub host_base: Option<String>,

    /// Virtual-hosted-style bucket pattern, e.g. %(bucket)s.example.com
    #[arg(long, global = true, value_name = "PATTERN")]
    pub host_bucket: Option<String>,

    /// Recurse into directories
    #[arg(short, long, global = true, default_value = "false")]
    pub recursive: bool,

    /// Number of concurrent workers (clamped to the core count)
    #[arg(long, global = true, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List buckets and objects
    Ls(ls::LsArgs),

    /// Show aggregate storage usage
    Du(du::DuArgs),

    /// Copy objects (not yet implemented)
    Cp(stub::StubArgs),

    /// Move objects (not yet implemented)
    Mv(stub::StubArgs),

    /// Synchronize directories (not yet implemented)
    Sync(stub::StubArgs),

    /// Download objects (not yet implemented)
    Get(stub::StubArgs),

    /// Upload objects (not yet implemented)
    Put(stub::StubArgs),

    /// Manage bucket policy (not yet implemented)
    Policy(stub::StubArgs),

    /// Manage multipart uploads (not yet implemented)
    Multipart(stub::StubArgs),

    /// Create directories (not yet implemented)
    Mkdir(stub::StubArgs),

    /// Remove objects (not yet implemented)
    Rm(stub::StubArgs),

    /// Change object permissions (not yet implemented)
    Chmod(stub::StubArgs),

    /// Change object ownership (not yet implemented)
    Chown(stub::StubArgs),

    /// Unlink objects (not yet implemented)
    Unlink(stub::StubArgs),
}

impl Commands {
    /// The verb name, for log messages
    fn name(&self) -> &'static str {
        match self {
            Commands::Ls(_) => "ls",
            Commands::Du(_) => "du",
            Commands::Cp(_) => "cp",
            Commands::Mv(_) => "mv",
            Commands::Sync(_) => "sync",
            Commands::Get(_) => "get",
            Commands::Put(_) => "put",
            Commands::Policy(_) => "policy",
            Commands::Multipart(_) => "multipart",
            Commands::Mkdir(_) => "mkdir",
            Commands::Rm(_) => "rm",
            Commands::Chmod(_) => "chmod",
            Commands::Chown(_) => "chown",
            Commands::Unlink(_) => "unlink",
        }
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        no_color: cli.no_color,
        quiet: cli.quiet,
    };
    let formatter = Formatter::new(output_config.clone());

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            formatter.error(&e.to_string());
            return ExitCode::from_error(&e);
        }
    };

    match cli.command {
        Commands::Ls(args) => ls::execute(args, config, output_config).await,
        Commands::Du(args) => du::execute(args, config, output_config).await,
        other => stub::execute(other.name()),
    }
}

/// Resolve connection settings for this invocation: config file, then
/// environment credentials, then command-line flags
fn resolve_config(cli: &Cli) -> s9_core::Result<ConnectionConfig> {
    let file = ConfigManager::new()?.load()?;
    let mut config = ConnectionConfig::from_file(file);
    config.apply_env();

    if let Some(key) = &cli.access_key {
        config.access_key = key.clone();
    }
    if let Some(key) = &cli.secret_key {
        config.secret_key = key.clone();
    }
    if let Some(host) = &cli.host_base {
        config.host_base = host.clone();
    }
    if let Some(pattern) = &cli.host_bucket {
        config.host_bucket = pattern.clone();
    }
    if let Some(threads) = cli.threads {
        config.parallelism = threads;
    }
    config.recursive = cli.recursive;
    config.clamp_parallelism();

    Ok(config)
}
