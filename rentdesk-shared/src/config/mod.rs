//! # Configuration
//!
//! Client settings shared by the web app and the CLI: where the backend
//! lives, where the token is kept, and how amounts are displayed.

mod client;

pub use client::{ClientConfig, ConfigError};
