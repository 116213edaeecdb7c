//! EmployeeService: existence rules and validation on top of the repository.

mod employee;
mod validation;
pub use employee::EmployeeService;
pub use validation::{RequestValidator, MAX_TEXT_LENGTH};
