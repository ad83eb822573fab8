//! Router construction and root mounting.

use axum::Router;

/// Path the application router is mounted at.
pub const ROOT_PATH: &str = "/";

/// A fresh request router with no routes registered.
pub fn routes() -> Router {
    Router::new()
}

/// Registers `router` as the handler for the root path.
///
/// The root mount covers the whole path tree, so every request the server
/// receives is dispatched to `router` with its URI untouched.
pub fn mount_root(router: Router) -> Router {
    log::debug!("Mounting application router at {ROOT_PATH}");
    Router::new().fallback_service(router)
}

/// The server application: [`routes`] mounted at [`ROOT_PATH`].
///
/// Nothing binds a listener; callers that want to serve it hand the result
/// to `axum::serve` themselves.
pub fn app() -> Router {
    mount_root(routes())
}
