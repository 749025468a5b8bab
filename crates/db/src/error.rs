//! Classification of connection-level failures.

/// A failed attempt to reach the database, classified by cause.
///
/// The variants follow the PostgreSQL SQLSTATE codes the server reports:
/// `28P01`/`28000` for rejected credentials and `3D000` for a missing
/// database. I/O and TLS failures mean the server itself was unreachable.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("database authentication failed")]
    Auth(#[source] sqlx::Error),

    #[error("database does not exist")]
    DatabaseMissing(#[source] sqlx::Error),

    #[error("database server not reachable")]
    Unreachable(#[source] sqlx::Error),

    #[error("database connection failed: {0}")]
    Other(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ConnectError {
    fn from(err: sqlx::Error) -> Self {
        // Classify by reference first so the error value can be moved into
        // the chosen variant afterwards.
        let sqlstate = match &err {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        };
        let unreachable = matches!(
            &err,
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolTimedOut
        );

        match sqlstate.as_deref() {
            Some("28P01") | Some("28000") => ConnectError::Auth(err),
            Some("3D000") => ConnectError::DatabaseMissing(err),
            _ if unreachable => ConnectError::Unreachable(err),
            _ => ConnectError::Other(err),
        }
    }
}
