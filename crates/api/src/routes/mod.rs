pub mod diagnostics;
pub mod health;
pub mod programs;
pub mod schools;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree. All paths are mounted at the root; there is
/// no version prefix.
///
/// ```text
/// GET  /                                   liveness
/// GET  /config                             credential-presence summary
/// GET  /test-db                            database probe
///
/// GET  /schools                            distinct school names
/// GET  /schools/{school_name}/programs     programs for a school
/// GET  /programs/{program_id}/courses      courses for a program
///
/// GET  /users                              list users
/// POST /users                              signup
/// GET  /users/{user_id}                    one user
/// GET  /users/{user_id}/plans              plans for a user
/// POST /users/{user_id}/plans              save a plan
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(diagnostics::router())
        .merge(schools::router())
        .merge(programs::router())
        .merge(users::router())
}
