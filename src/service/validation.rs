//! Request validation for employee text columns.

use crate::error::AppError;
use crate::model::EmployeeFields;

/// Width of the VARCHAR columns in the employees table.
pub const MAX_TEXT_LENGTH: usize = 255;

pub struct RequestValidator;

impl RequestValidator {
    /// Every present field must fit its column. Missing and null fields are allowed.
    pub fn validate(fields: &EmployeeFields) -> Result<(), AppError> {
        validate_field("name", fields.name.as_deref())?;
        validate_field("email", fields.email.as_deref())?;
        validate_field("position", fields.position.as_deref())?;
        Ok(())
    }
}

fn validate_field(col: &str, v: Option<&str>) -> Result<(), AppError> {
    if let Some(s) = v {
        if s.chars().count() > MAX_TEXT_LENGTH {
            return Err(AppError::Validation(format!(
                "{} must be at most {} characters",
                col, MAX_TEXT_LENGTH
            )));
        }
    }
    Ok(())
}
