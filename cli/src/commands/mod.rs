//! Command implementations

pub mod install;
pub mod uninstall;
pub mod version;
