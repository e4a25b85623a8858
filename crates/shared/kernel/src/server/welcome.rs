use titanic_domain::constants::{SYSTEM_TAG, WELCOME_MESSAGE};

#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "Welcome message", body = String, content_type = "text/plain")),
    tag = SYSTEM_TAG,
)]
#[allow(clippy::unused_async)]
pub(super) async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}
