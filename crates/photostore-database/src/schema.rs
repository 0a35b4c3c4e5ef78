//! Idempotent schema bootstrap.
//!
//! The schema name is deployment configuration, so the DDL is built at
//! runtime instead of using static migration files. The name is validated
//! as a plain lowercase SQL identifier before it is ever interpolated.

use sqlx::PgPool;
use tracing::{error, info};

use photostore_core::error::{AppError, ErrorKind};

/// Create the photo schema and table if they do not exist yet.
///
/// Safe to call repeatedly and from multiple processes at once; the DDL is
/// `IF NOT EXISTS` and races between concurrent creators are treated as
/// success. Runs once at startup; subsequent store operations assume the
/// schema exists.
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    validate_schema_name(schema)?;

    info!(schema, "Ensuring photo schema exists");

    execute_ddl(pool, &format!("CREATE SCHEMA IF NOT EXISTS {schema}")).await?;
    execute_ddl(
        pool,
        &format!(
            "CREATE TABLE IF NOT EXISTS {schema}.photos (\
             id UUID PRIMARY KEY, \
             filename VARCHAR(250) NOT NULL, \
             mime_type VARCHAR(255), \
             size_bytes BIGINT NOT NULL, \
             content BYTEA NOT NULL, \
             created_at TIMESTAMPTZ NOT NULL DEFAULT NOW())"
        ),
    )
    .await?;

    Ok(())
}

async fn execute_ddl(pool: &PgPool, ddl: &str) -> Result<(), AppError> {
    match sqlx::query(ddl).execute(pool).await {
        Ok(_) => Ok(()),
        // `IF NOT EXISTS` still races under concurrent bootstrap: two
        // processes can pass the existence check and one loses with a
        // duplicate-object or unique-violation error. The object exists
        // either way.
        Err(sqlx::Error::Database(ref db_err))
            if matches!(
                db_err.code().as_deref(),
                Some("42P06") | Some("42P07") | Some("23505")
            ) =>
        {
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Schema bootstrap failed");
            Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to ensure photo schema",
                e,
            ))
        }
    }
}

/// Check that a schema name is a plain lowercase SQL identifier.
pub fn validate_schema_name(schema: &str) -> Result<(), AppError> {
    let mut chars = schema.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_lowercase() || first == '_')
                && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(AppError::configuration(format!(
            "Invalid schema name '{schema}': expected a lowercase SQL identifier"
        )))
    }
}
