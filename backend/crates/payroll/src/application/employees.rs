//! Employee Use Case
//!
//! List is open to every session; writes are admin-only and the caller
//! must have passed `guard::require_admin` before reaching these methods.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::EmployeeId;
use serde_json::{Map, Value};

use crate::domain::entity::employee::SERVER_STAMPED_FIELDS;
use crate::domain::entity::{Employee, EmployeeChanges, NewEmployee, SessionUser};
use crate::domain::repository::EmployeeRepository;
use crate::error::{PayrollError, PayrollResult};

/// Validated create request
pub struct CreateEmployeeInput {
    pub name: String,
    pub position: Option<String>,
    pub fields: Map<String, Value>,
}

/// Validated update request
pub struct UpdateEmployeeInput {
    pub id: EmployeeId,
    pub fields: Map<String, Value>,
}

pub struct EmployeeUseCase<E>
where
    E: EmployeeRepository,
{
    employees: Arc<E>,
}

impl<E> EmployeeUseCase<E>
where
    E: EmployeeRepository,
{
    pub fn new(employees: Arc<E>) -> Self {
        Self { employees }
    }

    pub async fn list(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.employees.list().await?)
    }

    pub async fn create(
        &self,
        actor: &SessionUser,
        input: CreateEmployeeInput,
    ) -> PayrollResult<Vec<Employee>> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(PayrollError::InvalidInput("Name is required".to_string()));
        }

        let employee = NewEmployee {
            name: name.to_string(),
            position: input.position,
            created_by: actor.id.clone(),
            fields: strip_server_fields(input.fields),
        };

        let created = self.employees.create(&employee).await?;

        tracing::info!(actor = %actor.id, rows = created.len(), "Employee created");
        Ok(created)
    }

    pub async fn update(
        &self,
        actor: &SessionUser,
        input: UpdateEmployeeInput,
    ) -> PayrollResult<Vec<Employee>> {
        if input.id.as_str().is_empty() {
            return Err(PayrollError::InvalidInput("Employee id is required".to_string()));
        }

        if let Some(Value::String(name)) = input.fields.get("name") {
            if name.trim().is_empty() {
                return Err(PayrollError::InvalidInput("Name cannot be empty".to_string()));
            }
        }

        let changes = EmployeeChanges {
            fields: strip_server_fields(input.fields),
            updated_at: Utc::now(),
        };

        let updated = self.employees.update(&input.id, &changes).await?;

        tracing::info!(actor = %actor.id, employee_id = %input.id, "Employee updated");
        Ok(updated)
    }

    pub async fn delete(&self, actor: &SessionUser, employee_id: &EmployeeId) -> PayrollResult<()> {
        if employee_id.as_str().is_empty() {
            return Err(PayrollError::InvalidInput("Employee id is required".to_string()));
        }

        self.employees.delete(employee_id).await?;

        tracing::info!(actor = %actor.id, employee_id = %employee_id, "Employee deleted");
        Ok(())
    }
}

fn strip_server_fields(mut fields: Map<String, Value>) -> Map<String, Value> {
    for key in SERVER_STAMPED_FIELDS {
        fields.remove(key);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_server_fields() {
        let fields = json!({
            "id": "forged",
            "created_by": "someone-else",
            "updated_at": "1999-01-01T00:00:00Z",
            "department": "Finance"
        });
        let Value::Object(fields) = fields else {
            unreachable!()
        };

        let stripped = strip_server_fields(fields);
        assert_eq!(stripped.len(), 1);
        assert_eq!(stripped["department"], "Finance");
    }
}
