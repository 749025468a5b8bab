//! Program entity model.
//!
//! Programs are read-only from the API's perspective; rows are assumed
//! pre-populated, so there is no create or update DTO.

use degreepath_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full program row from the `programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub school_name: String,
    pub program_name: String,
    pub degree_type: String,
}
