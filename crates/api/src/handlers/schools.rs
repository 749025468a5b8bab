//! Handlers for the school catalog.

use axum::extract::{Path, State};
use axum::Json;
use degreepath_db::models::program::Program;
use degreepath_db::repositories::ProgramRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SchoolsResponse {
    pub schools: Vec<String>,
    pub count: usize,
}

#[derive(Serialize)]
pub struct SchoolProgramsResponse {
    pub school: String,
    pub programs: Vec<Program>,
    pub count: usize,
}

/// GET /schools
///
/// Distinct school names, alphabetical.
pub async fn list_schools(State(state): State<AppState>) -> AppResult<Json<SchoolsResponse>> {
    let schools = ProgramRepo::list_schools(&state.pool).await?;
    let count = schools.len();

    Ok(Json(SchoolsResponse { schools, count }))
}

/// GET /schools/{school_name}/programs
///
/// All programs for a school, ordered by program name. An unknown school
/// is not an error; it yields an empty list.
pub async fn list_programs_for_school(
    State(state): State<AppState>,
    Path(school_name): Path<String>,
) -> AppResult<Json<SchoolProgramsResponse>> {
    let programs = ProgramRepo::list_for_school(&state.pool, &school_name).await?;
    let count = programs.len();

    Ok(Json(SchoolProgramsResponse {
        school: school_name,
        programs,
        count,
    }))
}
