//! Degree plan entity model and DTOs.
//!
//! The plan payload is an opaque JSON document. It is stored in the
//! `plan_data` TEXT column as its serialized form and parsed back into a
//! [`serde_json::Value`] when read, so whatever a client submits comes back
//! deep-equal.

use degreepath_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// DTO for saving a plan. The owning user id comes from the request path.
#[derive(Debug, Deserialize)]
pub struct CreatePlan {
    pub program_id: DbId,
    pub plan_data: serde_json::Value,
}

/// The fields returned by a successful plan insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CreatedPlan {
    pub id: DbId,
    pub created_at: Timestamp,
}

/// Outcome of a plan save attempt.
///
/// The existence checks short-circuit: a missing user is reported without
/// looking at the program.
#[derive(Debug)]
pub enum PlanSaveOutcome {
    Saved(CreatedPlan),
    UserNotFound,
    ProgramNotFound,
}

/// A plan row joined with its program's descriptive fields.
#[derive(Debug, Clone, Serialize)]
pub struct PlanWithProgram {
    pub id: DbId,
    pub user_id: DbId,
    pub program_id: DbId,
    pub plan_data: serde_json::Value,
    pub created_at: Timestamp,
    pub school_name: String,
    pub program_name: String,
    pub degree_type: String,
}

impl FromRow<'_, PgRow> for PlanWithProgram {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let raw: String = row.try_get("plan_data")?;
        let plan_data =
            serde_json::from_str(&raw).map_err(|err| sqlx::Error::ColumnDecode {
                index: "plan_data".into(),
                source: Box::new(err),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            program_id: row.try_get("program_id")?,
            plan_data,
            created_at: row.try_get("created_at")?,
            school_name: row.try_get("school_name")?,
            program_name: row.try_get("program_name")?,
            degree_type: row.try_get("degree_type")?,
        })
    }
}
