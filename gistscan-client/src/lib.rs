//! Outbound side of gistscan: the gist lookup, candidate page fetches, and
//! the scanner that ties them to the core matching rules.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod scanner;

pub use backend::Upstream;
pub use config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_USER_AGENT};
pub use error::ClientError;
pub use http::HttpUpstream;
pub use scanner::GistScanner;
