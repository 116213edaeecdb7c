//! Employee operations against any [`EmployeeRepository`].

use super::RequestValidator;
use crate::error::AppError;
use crate::model::{Employee, EmployeeFields};
use crate::repository::EmployeeRepository;

pub struct EmployeeService;

impl EmployeeService {
    pub async fn list(repo: &dyn EmployeeRepository) -> Result<Vec<Employee>, AppError> {
        repo.find_all().await
    }

    /// Fetch one employee. A missing id is `AppError::NotFound`.
    pub async fn get(repo: &dyn EmployeeRepository, id: i64) -> Result<Employee, AppError> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Always inserts; the body never carries an id into the store.
    pub async fn create(repo: &dyn EmployeeRepository, fields: EmployeeFields) -> Result<Employee, AppError> {
        RequestValidator::validate(&fields)?;
        let saved = repo.save(None, &fields).await?;
        tracing::info!(id = saved.id, "employee created");
        Ok(saved)
    }

    /// Partial update: fields present in `patch` replace the stored ones.
    pub async fn update(
        repo: &dyn EmployeeRepository,
        id: i64,
        patch: EmployeeFields,
    ) -> Result<Employee, AppError> {
        RequestValidator::validate(&patch)?;
        let current = Self::get(repo, id).await?;
        let fields = current.fields().merged(patch);
        // The row may be deleted between the read and the write; that is a 404, never an insert.
        let saved = repo
            .update_by_id(id, &fields)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        tracing::info!(id, "employee updated");
        Ok(saved)
    }

    pub async fn delete(repo: &dyn EmployeeRepository, id: i64) -> Result<(), AppError> {
        if !repo.exists_by_id(id).await? {
            return Err(AppError::NotFound(id.to_string()));
        }
        repo.delete_by_id(id).await?;
        tracing::info!(id, "employee deleted");
        Ok(())
    }
}
