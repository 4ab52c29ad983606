//! Shared domain types for readpal.
//!
//! This crate contains the core domain types used across the readpal client:
//! personas, chat messages, session state, classification metadata, the
//! backend wire contract, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod classify;
pub mod config;
pub mod error;
pub mod persona;
pub mod wire;
