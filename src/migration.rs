//! Employee table DDL. Idempotent: safe to run on every start.

use crate::error::AppError;
use crate::repository::EMPLOYEE_TABLE;
use crate::service::MAX_TEXT_LENGTH;
use sqlx::PgPool;

fn employees_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR({len}),
            email VARCHAR({len}),
            position VARCHAR({len})
        )
        "#,
        table = EMPLOYEE_TABLE,
        len = MAX_TEXT_LENGTH
    )
}

/// Create the employees table if it does not exist.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let ddl = employees_ddl();
    tracing::debug!(sql = %ddl, "migration");
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = EMPLOYEE_TABLE, "schema ready");
    Ok(())
}
