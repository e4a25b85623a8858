//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; it provides config loading, the shared API
//! state, and the system routes every deployment carries.
//!
//! ## Config loading
//! ```rust,ignore
//! use titanic_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
pub mod server;

pub use titanic_domain as domain;
