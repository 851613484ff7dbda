//! Domain layer — configuration resolution, password generation and command
//! composition.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod password;
