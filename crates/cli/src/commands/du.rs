//! du command - Aggregate storage usage
//!
//! Sums object count and total size per argument, or across every bucket of
//! the account when no arguments are given. Short `-h` is taken by --human
//! here, so help is reachable via --help only.

use clap::Args;

use s9_core::{measure, ConnectionConfig};
use s9_s3::S3Store;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Show aggregate storage usage
#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct DuArgs {
    /// Remote paths (s3://bucket[/prefix]); empty measures all buckets
    pub paths: Vec<String>,

    /// Print sizes in human-readable form
    #[arg(short = 'h', long)]
    pub human: bool,

    /// Display only totals
    #[arg(short, long)]
    pub summarize: bool,

    /// Include all objects, not just the top level
    #[arg(short, long)]
    pub all: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,
}

/// Execute the du command
pub async fn execute(args: DuArgs, config: ConnectionConfig, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let store = S3Store::connect(config).await;

    let result = measure(&store, &args.paths, |summary| {
        let size = if args.human {
            humansize::format_size(summary.total_size.max(0) as u64, humansize::BINARY)
        } else {
            summary.total_size.to_string()
        };
        formatter.println(&format!(
            "{size} {} objects {}",
            summary.objects, summary.argument
        ));
    })
    .await;

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            formatter.error(&format!("du {e}"));
            ExitCode::from_error(&e)
        }
    }
}
