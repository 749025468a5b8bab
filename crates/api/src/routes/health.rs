//! Root liveness route.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// ```text
/// GET / -> root
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health::root))
}
