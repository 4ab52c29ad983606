//! Session logic and backend port definitions for readpal.
//!
//! This crate defines the "ports" (backend traits) that the
//! infrastructure layer implements, plus the pure session machinery:
//! message classification, the bounded history window, the persona
//! registry, and the session controller state machine. It depends only
//! on `readpal-types` -- never on `readpal-infra` or any HTTP crate.

pub mod backend;
pub mod classify;
pub mod history;
pub mod persona;
pub mod session;
