//! Handlers for program course listings.

use axum::extract::{Path, State};
use axum::Json;
use degreepath_core::error::CoreError;
use degreepath_core::types::DbId;
use degreepath_db::models::course::Course;
use degreepath_db::repositories::{CourseRepo, ProgramRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProgramCoursesResponse {
    pub program_id: DbId,
    pub program_name: String,
    pub school_name: String,
    pub courses: Vec<Course>,
    pub total_courses: usize,
}

/// GET /programs/{program_id}/courses
///
/// All courses for a program, ordered by course code. 404 when the
/// program id does not exist.
pub async fn list_courses_for_program(
    State(state): State<AppState>,
    Path(program_id): Path<DbId>,
) -> AppResult<Json<ProgramCoursesResponse>> {
    let program = ProgramRepo::find_by_id(&state.pool, program_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Program",
            id: program_id,
        }))?;

    let courses = CourseRepo::list_for_program(&state.pool, program_id).await?;
    let total_courses = courses.len();

    Ok(Json(ProgramCoursesResponse {
        program_id,
        program_name: program.program_name,
        school_name: program.school_name,
        courses,
        total_courses,
    }))
}
