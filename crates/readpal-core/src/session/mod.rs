//! Session lifecycle and controller.

pub mod controller;
pub mod lifecycle;

pub use controller::SessionController;
