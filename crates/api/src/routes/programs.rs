//! Program course-listing route.

use axum::routing::get;
use axum::Router;

use crate::handlers::programs;
use crate::state::AppState;

/// ```text
/// GET /programs/{program_id}/courses -> list_courses_for_program
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/programs/{program_id}/courses",
        get(programs::list_courses_for_program),
    )
}
