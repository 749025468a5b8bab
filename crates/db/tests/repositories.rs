//! Integration tests for the repository layer against a real database.

use assert_matches::assert_matches;
use degreepath_db::models::plan::PlanSaveOutcome;
use degreepath_db::models::user::CreateUser;
use degreepath_db::repositories::{CourseRepo, PlanRepo, ProgramRepo, UserRepo};
use sqlx::PgPool;

async fn seed_program(pool: &PgPool, school: &str, program: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO programs (school_name, program_name, degree_type)
         VALUES ($1, $2, 'BS')
         RETURNING id",
    )
    .bind(school)
    .bind(program)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    let input = CreateUser {
        email: "a@x.com".into(),
        name: "A".into(),
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn find_by_id_returns_none_for_missing_user(pool: PgPool) {
    let found = UserRepo::find_by_id(&pool, 42).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_schools_deduplicates(pool: PgPool) {
    seed_program(&pool, "Engineering", "Computer Science").await;
    seed_program(&pool, "Engineering", "Electrical Engineering").await;

    let schools = ProgramRepo::list_schools(&pool).await.unwrap();
    assert_eq!(schools, vec!["Engineering"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn course_array_columns_preserve_order(pool: PgPool) {
    let program_id = seed_program(&pool, "Engineering", "Computer Science").await;
    sqlx::query(
        "INSERT INTO courses (program_id, code, title, credits, offered_terms, prerequisites)
         VALUES ($1, 'CS301', 'Algorithms', 4, $2, $3)",
    )
    .bind(program_id)
    .bind(vec!["Spring".to_string(), "Fall".to_string()])
    .bind(vec!["CS101".to_string(), "CS201".to_string()])
    .execute(&pool)
    .await
    .unwrap();

    let courses = CourseRepo::list_for_program(&pool, program_id).await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].offered_terms, vec!["Spring", "Fall"]);
    assert_eq!(courses[0].prerequisites, vec!["CS101", "CS201"]);
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn plan_save_short_circuits_on_missing_user(pool: PgPool) {
    let program_id = seed_program(&pool, "Engineering", "Computer Science").await;

    let outcome = PlanRepo::create(&pool, 999, program_id, &serde_json::json!({}))
        .await
        .unwrap();
    assert_matches!(outcome, PlanSaveOutcome::UserNotFound);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plans")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn plan_save_reports_missing_program(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "a@x.com".into(),
            name: "A".into(),
        },
    )
    .await
    .unwrap();

    let outcome = PlanRepo::create(&pool, user.id, 999, &serde_json::json!({}))
        .await
        .unwrap();
    assert_matches!(outcome, PlanSaveOutcome::ProgramNotFound);
}

#[sqlx::test(migrations = "../../migrations")]
async fn plan_payload_survives_textual_storage(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "a@x.com".into(),
            name: "A".into(),
        },
    )
    .await
    .unwrap();
    let program_id = seed_program(&pool, "Engineering", "Computer Science").await;

    let payload = serde_json::json!({
        "semesters": [{"term": "Fall", "courses": ["CS101"]}],
        "notes": null,
    });

    let outcome = PlanRepo::create(&pool, user.id, program_id, &payload)
        .await
        .unwrap();
    assert_matches!(outcome, PlanSaveOutcome::Saved(_));

    let plans = PlanRepo::list_for_user(&pool, user.id).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].plan_data, payload);
    assert_eq!(plans[0].program_name, "Computer Science");
}
