//! Repository for the `programs` table (read-only from the API).

use degreepath_core::types::DbId;
use sqlx::PgPool;

use crate::models::program::Program;

const COLUMNS: &str = "id, school_name, program_name, degree_type";

/// Provides read operations for programs.
pub struct ProgramRepo;

impl ProgramRepo {
    /// Distinct school names, alphabetical.
    pub async fn list_schools(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT school_name FROM programs ORDER BY school_name")
            .fetch_all(pool)
            .await
    }

    /// All programs for a school, ordered by program name.
    pub async fn list_for_school(
        pool: &PgPool,
        school_name: &str,
    ) -> Result<Vec<Program>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM programs WHERE school_name = $1 ORDER BY program_name"
        );
        sqlx::query_as::<_, Program>(&query)
            .bind(school_name)
            .fetch_all(pool)
            .await
    }

    /// Find a program by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
