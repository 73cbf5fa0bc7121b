//! Layered configuration for refscan.
//!
//! See [`load`] for where values come from and in which order they override
//! each other.

mod config;
pub mod error;
mod load;

pub use crate::config::{Config, RepositoryConfig, ServerConfig};
pub use crate::load::{ENV_PREFIX, candidate_files, figment, load};
