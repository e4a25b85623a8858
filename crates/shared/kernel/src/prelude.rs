//! Ergonomic re-exports for downstream crates.

pub use crate::config::load_config;
pub use crate::server::state::{ApiState, ApiStateError};
