//! User and user-plan routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{plans, users};
use crate::state::AppState;

/// ```text
/// GET  /users                   -> list_users
/// POST /users                   -> create_user
/// GET  /users/{user_id}         -> get_user
/// GET  /users/{user_id}/plans   -> list_user_plans
/// POST /users/{user_id}/plans   -> save_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{user_id}", get(users::get_user))
        .route(
            "/users/{user_id}/plans",
            get(plans::list_user_plans).post(plans::save_plan),
        )
}
