//! Persistence gateway for employee rows.
//!
//! Handlers and the service layer only see [`EmployeeRepository`]; the server wires in
//! [`PgEmployeeRepository`]; [`MemoryEmployeeRepository`] backs the test suites.

mod memory;
mod postgres;

pub use memory::MemoryEmployeeRepository;
pub use postgres::{PgEmployeeRepository, EMPLOYEE_TABLE};

use crate::error::AppError;
use crate::model::{Employee, EmployeeFields};
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored row. Empty when the table is empty.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    /// The row with `id`, or `None`. Absence is not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Insert-or-update. With `None`, or an id that is not stored, a new row is inserted
    /// and gets a fresh id; with a stored id that row is overwritten.
    async fn save(&self, id: Option<i64>, fields: &EmployeeFields) -> Result<Employee, AppError>;

    /// Overwrite the row with `id` only if it is stored. Never inserts; `None` when absent.
    async fn update_by_id(&self, id: i64, fields: &EmployeeFields) -> Result<Option<Employee>, AppError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Remove the row with `id`. Callers check [`exists_by_id`](Self::exists_by_id) first.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    /// Cheap connectivity check for the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
