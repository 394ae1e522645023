//! User-facing output channels.
//!
//! Prompt text flows through `status`; diagnostics go to `tracing` instead.

pub mod status;
