//! HTTP front end for gistscan.
//!
//! Exposes a liveness check and a search endpoint that scans every URL found
//! in a GitHub user's public gists for a regular expression.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
