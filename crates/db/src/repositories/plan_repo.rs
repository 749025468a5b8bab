//! Repository for the `plans` table.

use degreepath_core::types::DbId;
use sqlx::PgPool;

use crate::models::plan::{CreatedPlan, PlanSaveOutcome, PlanWithProgram};

/// Provides operations for degree plans. Plans are insert-only: a user may
/// accumulate many, none are ever updated or deleted through the API.
pub struct PlanRepo;

impl PlanRepo {
    /// Save a plan after verifying both foreign keys exist.
    ///
    /// The two existence checks and the insert run on one transaction, so
    /// the referential validation and the write commit (or roll back) as a
    /// unit. The payload is serialized to its textual storage form here.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        program_id: DbId,
        plan_data: &serde_json::Value,
    ) -> Result<PlanSaveOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&mut *tx)
                .await?;
        if user_exists.is_none() {
            return Ok(PlanSaveOutcome::UserNotFound);
        }

        let program_exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM programs WHERE id = $1")
                .bind(program_id)
                .fetch_optional(&mut *tx)
                .await?;
        if program_exists.is_none() {
            return Ok(PlanSaveOutcome::ProgramNotFound);
        }

        let created = sqlx::query_as::<_, CreatedPlan>(
            "INSERT INTO plans (user_id, program_id, plan_data)
             VALUES ($1, $2, $3)
             RETURNING id, created_at",
        )
        .bind(user_id)
        .bind(program_id)
        .bind(plan_data.to_string())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(PlanSaveOutcome::Saved(created))
    }

    /// All plans owned by a user, newest first, each joined with its
    /// program's school, name, and degree type.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PlanWithProgram>, sqlx::Error> {
        sqlx::query_as::<_, PlanWithProgram>(
            "SELECT
                p.id,
                p.user_id,
                p.program_id,
                p.plan_data,
                p.created_at,
                pr.school_name,
                pr.program_name,
                pr.degree_type
             FROM plans p
             JOIN programs pr ON p.program_id = pr.id
             WHERE p.user_id = $1
             ORDER BY p.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
