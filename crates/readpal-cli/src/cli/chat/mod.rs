//! Interactive chat experience for readpal.
//!
//! This module implements the full terminal session: persona selection,
//! optional name capture, welcome banner, the input loop with thinking
//! spinners and slash commands, and the reset path back to selection.
//! Entry point: `loop_runner::run_chat`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;

pub use loop_runner::run_chat;
