//! Library interface for the vsed CLI
//!
//! This module exposes the input readers and report rendering for integration
//! testing while keeping the command dispatch in main.rs.

pub mod io;

// Re-export commonly needed types for tests
pub use anyhow::Result;
pub use vsed_core::config::Config;
