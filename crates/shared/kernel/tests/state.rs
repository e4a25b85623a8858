use titanic_domain::config::ApiConfig;
use titanic_kernel::server::state::{ApiState, ApiStateError};

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("missing config should be rejected");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn state_exposes_config() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .build()
        .expect("state should build");

    assert_eq!(state.config.server.port, 5000);
}
