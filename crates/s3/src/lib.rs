//! s9-s3: S3 SDK adapter for the s9 CLI client
//!
//! This crate implements the ObjectStore trait using aws-sdk-s3, including
//! per-bucket endpoint resolution. It is the only crate that directly
//! depends on the AWS SDK.

pub mod client;
pub mod resolver;

pub use client::S3Store;
