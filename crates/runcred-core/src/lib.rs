//! Core logic for runcred credential materialization
//!
//! This crate provides:
//! - A read-only view over a credential's named input fields
//! - Owner-only secret file creation under a run's private data directory
//! - Host-to-container path translation for staged files
//! - Per-kind injectors that turn credential fields into environment
//!   variables and secret files for a launched job process

mod credential;
mod error;
mod injectors;
mod paths;
mod sink;

pub use credential::*;
pub use error::*;
pub use injectors::*;
pub use paths::*;
pub use sink::*;
