//! Infrastructure layer for readpal.
//!
//! Contains implementations of the backend ports defined in
//! `readpal-core` (the reqwest HTTP client) and the TOML configuration
//! loader.

pub mod config;
pub mod http;
