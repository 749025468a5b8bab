//! Configuration-echo and database-probe handlers.
//!
//! Both endpoints exist to debug deployments. `/test-db` never fails the
//! request: any error is folded into a structured payload describing the
//! connection parameters that were used (password masked).

use axum::extract::State;
use axum::Json;
use degreepath_db::{diagnostics, ConnectError};
use serde::Serialize;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /config
// ---------------------------------------------------------------------------

/// Credential-presence summary. Reports whether a password is set, never
/// its value.
#[derive(Serialize)]
pub struct ConfigStatus {
    pub database: DatabaseStatus,
    pub environment_file_loaded: bool,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

#[derive(Serialize)]
pub struct DatabaseStatus {
    pub host: String,
    pub port: u16,
    pub name: Option<String>,
    pub user: Option<String>,
    pub password_set: bool,
}

/// GET /config -- echo which credentials are present.
pub async fn check_config(State(state): State<AppState>) -> Json<ConfigStatus> {
    let db = &state.config.database;
    let credentials_present = db.credentials_present();

    Json(ConfigStatus {
        database: DatabaseStatus {
            host: db.host.clone(),
            port: db.port,
            name: db.name.clone(),
            user: db.user.clone(),
            password_set: db.password.is_some(),
        },
        environment_file_loaded: state.config.env_file_loaded,
        status: if credentials_present {
            "OK"
        } else {
            "MISSING_CREDENTIALS"
        },
        error: (!credentials_present).then_some("DB_USER or DB_PASSWORD not set in environment"),
    })
}

// ---------------------------------------------------------------------------
// GET /test-db
// ---------------------------------------------------------------------------

/// Probe result. Exactly one of the two shapes is returned; failures are
/// embedded here rather than surfaced as HTTP errors.
#[derive(Serialize)]
#[serde(untagged)]
pub enum DbProbeResponse {
    Ok(DbProbeOk),
    Err(DbProbeErr),
}

#[derive(Serialize)]
pub struct DbProbeOk {
    pub status: &'static str,
    pub message: &'static str,
    pub database_name: String,
    pub tables_found: Vec<String>,
    pub programs_count: Option<i64>,
}

#[derive(Serialize)]
pub struct DbProbeErr {
    pub status: &'static str,
    pub message: String,
    pub database_url_format: String,
    pub connection_details: ConnectionDetails,
}

#[derive(Serialize)]
pub struct ConnectionDetails {
    pub host: String,
    pub port: u16,
    pub database: Option<String>,
    pub user: Option<String>,
}

/// GET /test-db -- connect, enumerate visible tables, and count programs.
pub async fn test_database(State(state): State<AppState>) -> Json<DbProbeResponse> {
    match probe(&state).await {
        Ok(ok) => Json(DbProbeResponse::Ok(ok)),
        Err(err) => {
            let classified = ConnectError::from(err);
            tracing::warn!(error = %classified, "Database probe failed");

            let db = &state.config.database;
            Json(DbProbeResponse::Err(DbProbeErr {
                status: "error",
                message: format!("Database error: {classified}"),
                database_url_format: db.masked_url(),
                connection_details: ConnectionDetails {
                    host: db.host.clone(),
                    port: db.port,
                    database: db.name.clone(),
                    user: db.user.clone(),
                },
            }))
        }
    }
}

async fn probe(state: &AppState) -> Result<DbProbeOk, sqlx::Error> {
    let database_name = diagnostics::current_database(&state.pool).await?;
    let tables_found = diagnostics::list_public_tables(&state.pool).await?;

    let programs_count = if tables_found.iter().any(|t| t == "programs") {
        Some(diagnostics::count_programs(&state.pool).await?)
    } else {
        None
    };

    Ok(DbProbeOk {
        status: "success",
        message: "Database connection working!",
        database_name,
        tables_found,
        programs_count,
    })
}
