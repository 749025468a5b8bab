//! Course entity model.

use degreepath_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full course row from the `courses` table. Read-only from the API.
///
/// `offered_terms` and `prerequisites` are PostgreSQL `TEXT[]` columns;
/// their element order is preserved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub program_id: DbId,
    pub code: String,
    pub title: String,
    pub credits: i32,
    pub offered_terms: Vec<String>,
    pub prerequisites: Vec<String>,
}
