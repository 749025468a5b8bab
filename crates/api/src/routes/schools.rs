//! School catalog routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::schools;
use crate::state::AppState;

/// ```text
/// GET /schools                          -> list_schools
/// GET /schools/{school_name}/programs   -> list_programs_for_school
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schools", get(schools::list_schools))
        .route(
            "/schools/{school_name}/programs",
            get(schools::list_programs_for_school),
        )
}
