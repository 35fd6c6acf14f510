//! Command-line front end for the poll service.
//!
//! `main` is the composition root: it reads `Config`, builds the single
//! `HttpClient`, and injects it into `poll_core::ApiService`. The commands
//! only ever see the service.

pub mod commands;
pub mod config;
pub mod http_client;
pub mod render;

pub use commands::{run, Command};
pub use config::Config;
pub use http_client::HttpClient;
