//! Diagnostics routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::diagnostics;
use crate::state::AppState;

/// ```text
/// GET /config   -> check_config
/// GET /test-db  -> test_database
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(diagnostics::check_config))
        .route("/test-db", get(diagnostics::test_database))
}
