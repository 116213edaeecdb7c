//! Employee records: JSON REST backend over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Employee, EmployeeFields};
pub use repository::{EmployeeRepository, MemoryEmployeeRepository, PgEmployeeRepository};
pub use routes::{app, employee_routes, service_routes, EMPLOYEES_API_PATH};
pub use service::EmployeeService;
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
