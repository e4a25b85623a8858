//! Shared constants used across services.

/// Welcome message served on the root route. Clients and tests use it as a
/// liveness confirmation, so the text must stay stable.
pub const WELCOME_MESSAGE: &str = "Welcome to the Titanic API";

/// OpenAPI tag grouping the always-on system routes.
pub const SYSTEM_TAG: &str = "system";
