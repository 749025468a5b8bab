//! Handlers for saving and listing degree plans.

use axum::extract::{Path, State};
use axum::Json;
use degreepath_core::error::CoreError;
use degreepath_core::types::{DbId, Timestamp};
use degreepath_db::models::plan::{CreatePlan, PlanSaveOutcome, PlanWithProgram};
use degreepath_db::repositories::PlanRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct UserPlansResponse {
    pub user_id: DbId,
    pub plans: Vec<PlanWithProgram>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct SavePlanResponse {
    pub message: &'static str,
    pub plan_id: DbId,
    pub created_at: Timestamp,
}

/// GET /users/{user_id}/plans
///
/// All plans owned by a user, newest first, each enriched with its
/// program's school, name, and degree type. The stored payload is parsed
/// back into a structured document before it is returned.
pub async fn list_user_plans(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserPlansResponse>> {
    let plans = PlanRepo::list_for_user(&state.pool, user_id).await?;
    let count = plans.len();

    Ok(Json(UserPlansResponse {
        user_id,
        plans,
        count,
    }))
}

/// POST /users/{user_id}/plans
///
/// Save a plan. Both foreign keys are verified before the insert, and the
/// checks short-circuit: a missing user answers 404 without consulting the
/// program.
pub async fn save_plan(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<CreatePlan>,
) -> AppResult<Json<SavePlanResponse>> {
    let outcome =
        PlanRepo::create(&state.pool, user_id, input.program_id, &input.plan_data).await?;

    let created = match outcome {
        PlanSaveOutcome::Saved(created) => created,
        PlanSaveOutcome::UserNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }))
        }
        PlanSaveOutcome::ProgramNotFound => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Program",
                id: input.program_id,
            }))
        }
    };

    tracing::info!(user_id, plan_id = created.id, "Plan saved");

    Ok(Json(SavePlanResponse {
        message: "Plan saved successfully",
        plan_id: created.id,
        created_at: created.created_at,
    }))
}
