//! Shared application state for all routes.

use crate::repository::EmployeeRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}
