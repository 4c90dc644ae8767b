//! Configuration parsing for runcred
//!
//! This crate handles parsing of the global configuration
//! (`~/.config/runcred/config.toml`): process-wide defaults consulted by
//! the credential injectors, independent of any single credential record.

mod error;
mod global;

pub use error::*;
pub use global::*;
