//! PostgreSQL adapter. All statements are parameterized and built once from [`EMPLOYEE_TABLE`].

use super::EmployeeRepository;
use crate::error::AppError;
use crate::model::{Employee, EmployeeFields};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

pub const EMPLOYEE_TABLE: &str = "employees";

const COLUMNS: &str = "id, name, email, position";

/// SQL text for every gateway operation against one table.
#[derive(Debug)]
struct Statements {
    select_all: String,
    select_by_id: String,
    insert: String,
    update: String,
    exists: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Statements {
            select_all: format!("SELECT {COLUMNS} FROM {table} ORDER BY id"),
            select_by_id: format!("SELECT {COLUMNS} FROM {table} WHERE id = $1"),
            insert: format!(
                "INSERT INTO {table} (name, email, position) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
            ),
            update: format!(
                "UPDATE {table} SET name = $2, email = $3, position = $4 WHERE id = $1 RETURNING {COLUMNS}"
            ),
            exists: format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)"),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
    sql: Arc<Statements>,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            sql: Arc::new(Statements::for_table(EMPLOYEE_TABLE)),
        }
    }

    async fn insert(&self, fields: &EmployeeFields) -> Result<Employee, AppError> {
        tracing::debug!(sql = %self.sql.insert, "query");
        let row = sqlx::query_as::<_, Employee>(&self.sql.insert)
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.position)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        tracing::debug!(sql = %self.sql.select_all, "query");
        let rows = sqlx::query_as::<_, Employee>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        tracing::debug!(sql = %self.sql.select_by_id, id, "query");
        let row = sqlx::query_as::<_, Employee>(&self.sql.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, id: Option<i64>, fields: &EmployeeFields) -> Result<Employee, AppError> {
        let Some(id) = id else {
            return self.insert(fields).await;
        };
        match self.update_by_id(id, fields).await? {
            Some(row) => Ok(row),
            None => self.insert(fields).await,
        }
    }

    async fn update_by_id(&self, id: i64, fields: &EmployeeFields) -> Result<Option<Employee>, AppError> {
        tracing::debug!(sql = %self.sql.update, id, "query");
        let row = sqlx::query_as::<_, Employee>(&self.sql.update)
            .bind(id)
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.position)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = %self.sql.exists, id, "query");
        let exists: (bool,) = sqlx::query_as(&self.sql.exists)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(sql = %self.sql.delete, id, "query");
        sqlx::query(&self.sql.delete).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
