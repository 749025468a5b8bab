//! Handlers for user signup and lookup.

use axum::extract::{Path, State};
use axum::Json;
use degreepath_core::error::CoreError;
use degreepath_core::types::DbId;
use degreepath_db::models::user::{CreateUser, User};
use degreepath_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub user: User,
}

/// GET /users
///
/// All users, ordered by display name.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UsersResponse>> {
    let users = UserRepo::list(&state.pool).await?;
    let count = users.len();

    Ok(Json(UsersResponse { users, count }))
}

/// GET /users/{user_id}
///
/// One user by id. 404 when absent.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(user))
}

/// POST /users
///
/// Create a user. The unique-email invariant is enforced by the database
/// constraint; a violation answers 400 with a descriptive message.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<Json<CreateUserResponse>> {
    let user = UserRepo::create(&state.pool, &input).await.map_err(|err| {
        if is_unique_violation(&err) {
            AppError::Core(CoreError::Conflict("Email already exists".into()))
        } else {
            AppError::Database(err)
        }
    })?;

    tracing::info!(user_id = user.id, "User created");

    Ok(Json(CreateUserResponse {
        message: "User created successfully",
        user,
    }))
}
