//! Shared types and error definitions for the DegreePath workspace.

pub mod error;
pub mod types;

pub use error::CoreError;
