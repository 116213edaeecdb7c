//! In-process adapter with the same contract as the Postgres one.
//! Ids come from a monotonically increasing counter and are never reused.
//!
//! Test support: the server never constructs it. It is public so the router tests
//! under `tests/` and downstream crates can run the API without a database.

use super::EmployeeRepository;
use crate::error::AppError;
use crate::model::{Employee, EmployeeFields};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryEmployeeRepository {
    inner: RwLock<Table>,
    unavailable: AtomicBool,
}

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Employee>,
    last_id: i64,
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fault injection for tests. While set, every operation fails as if the store were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        self.check_available()?;
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        self.check_available()?;
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, fields: &EmployeeFields) -> Result<Employee, AppError> {
        self.check_available()?;
        let mut table = self.inner.write().await;
        let id = match id {
            Some(id) if table.rows.contains_key(&id) => id,
            _ => {
                table.last_id += 1;
                table.last_id
            }
        };
        let row = fields.clone().with_id(id);
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update_by_id(&self, id: i64, fields: &EmployeeFields) -> Result<Option<Employee>, AppError> {
        self.check_available()?;
        let mut table = self.inner.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        *row = fields.clone().with_id(id);
        Ok(Some(row.clone()))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.check_available()?;
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> EmployeeFields {
        EmployeeFields {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn save_without_id_assigns_fresh_ids() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.save(None, &named("a")).await.unwrap();
        let b = repo.save(None, &named("b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.find_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn save_with_stored_id_overwrites() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.save(None, &named("a")).await.unwrap();
        let renamed = repo.save(Some(a.id), &named("z")).await.unwrap();
        assert_eq!(renamed.id, a.id);
        assert_eq!(repo.find_by_id(a.id).await.unwrap().unwrap().name.as_deref(), Some("z"));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_new_row() {
        let repo = MemoryEmployeeRepository::new();
        let row = repo.save(Some(42), &named("a")).await.unwrap();
        assert_eq!(row.id, 1);
        assert!(!repo.exists_by_id(42).await.unwrap());
    }

    #[tokio::test]
    async fn update_by_id_never_inserts() {
        let repo = MemoryEmployeeRepository::new();
        assert!(repo.update_by_id(1, &named("a")).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());

        let a = repo.save(None, &named("a")).await.unwrap();
        let updated = repo.update_by_id(a.id, &named("b")).await.unwrap().unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.name.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let repo = MemoryEmployeeRepository::new();
        let a = repo.save(None, &named("a")).await.unwrap();
        repo.delete_by_id(a.id).await.unwrap();
        assert!(!repo.exists_by_id(a.id).await.unwrap());
        assert!(repo.find_by_id(a.id).await.unwrap().is_none());
        let b = repo.save(None, &named("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let repo = MemoryEmployeeRepository::new();
        repo.set_unavailable(true);
        assert!(matches!(repo.find_all().await, Err(AppError::Db(_))));
        assert!(matches!(repo.ping().await, Err(AppError::Db(_))));
        repo.set_unavailable(false);
        assert!(repo.ping().await.is_ok());
    }
}
