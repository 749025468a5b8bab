//! Request handlers.
//!
//! Each submodule provides async handler functions for one slice of the
//! API surface. Handlers delegate to the repositories in `degreepath_db`
//! and map errors via [`crate::error::AppError`].

pub mod diagnostics;
pub mod health;
pub mod plans;
pub mod programs;
pub mod schools;
pub mod users;
