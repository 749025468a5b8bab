//! Repository for the `courses` table (read-only from the API).

use degreepath_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::Course;

const COLUMNS: &str = "id, program_id, code, title, credits, offered_terms, prerequisites";

/// Provides read operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// All courses belonging to a program, ordered by course code.
    pub async fn list_for_program(
        pool: &PgPool,
        program_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE program_id = $1 ORDER BY code");
        sqlx::query_as::<_, Course>(&query)
            .bind(program_id)
            .fetch_all(pool)
            .await
    }
}
