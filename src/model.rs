//! Employee record shapes.

use serde::{Deserialize, Serialize};

/// A stored employee row. `id` is assigned by the store on first insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}

/// The writable columns of an employee. Request bodies deserialize into this;
/// an `id` key in the body is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
}

impl Employee {
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
        }
    }
}

impl EmployeeFields {
    pub fn with_id(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            position: self.position,
        }
    }

    /// Overlay `patch` on `self`: fields present in the patch win, absent ones keep their value.
    pub fn merged(self, patch: EmployeeFields) -> EmployeeFields {
        EmployeeFields {
            name: patch.name.or(self.name),
            email: patch.email.or(self.email),
            position: patch.position.or(self.position),
        }
    }
}
