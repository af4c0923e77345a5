//! Employee Repository

use chrono::Utc;
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeResponse, EmployeeUpdate};

const TABLE: &str = "employee";

/// Parse and validate a client-supplied identifier
///
/// Only the full `employee:key` record id form is accepted; anything else is
/// rejected before the store is touched. Used uniformly by get, update and
/// delete.
pub fn parse_employee_id(id: &str) -> RepoResult<RecordId> {
    let record_id: RecordId = id
        .parse()
        .map_err(|_| RepoError::Validation(format!("Invalid employee ID format: {}", id)))?;
    if record_id.table() != TABLE {
        return Err(RepoError::Validation(format!(
            "Invalid employee ID format: {}",
            id
        )));
    }
    Ok(record_id)
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Shape a stored record into the API response form
    fn shape(employee: Employee) -> RepoResult<EmployeeResponse> {
        let id = employee
            .id
            .ok_or_else(|| RepoError::Database("Stored employee is missing an id".to_string()))?;
        Ok(EmployeeResponse {
            id: id.to_string(),
            name: employee.name,
            email: employee.email,
            department: employee.department,
            position: employee.position,
            salary: employee.salary,
            hire_date: employee.hire_date,
        })
    }

    async fn fetch(&self, id: &RecordId) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = self.base.db().select(id.clone()).await?;
        Ok(employee)
    }

    /// Find all employees in store order
    pub async fn find_all(&self) -> RepoResult<Vec<EmployeeResponse>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee")
            .await?
            .take(0)?;
        employees.into_iter().map(Self::shape).collect()
    }

    /// Find employee by id; `None` when no record matches
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeResponse>> {
        let record_id = parse_employee_id(id)?;
        match self.fetch(&record_id).await? {
            Some(employee) => Ok(Some(Self::shape(employee)?)),
            None => Ok(None),
        }
    }

    /// Find employee by email (exact match)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// True when a record other than `id` already holds `email`
    async fn email_taken_by_other(&self, email: &str, id: &RecordId) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email AND id != $id LIMIT 1")
            .bind(("email", email.to_string()))
            .bind(("id", id.clone()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(!employees.is_empty())
    }

    /// Create a new employee
    ///
    /// The email pre-check and the insert are two separate store calls with
    /// no atomicity between them: concurrent creates with the same email can
    /// both pass the check.
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<EmployeeResponse> {
        // Check duplicate email
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                data.email
            )));
        }

        let employee = Employee {
            id: None,
            name: data.name,
            email: data.email,
            department: data.department,
            position: data.position,
            salary: data.salary,
            hire_date: data.hire_date.unwrap_or_else(Utc::now),
        };

        let created: Option<Employee> = self.base.db().create(TABLE).content(employee).await?;
        let id = created
            .and_then(|e| e.id)
            .ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))?;

        // Read back by the assigned id so the response reflects the stored record
        let stored = self
            .fetch(&id)
            .await?
            .ok_or_else(|| RepoError::Database(format!("Employee {} missing after insert", id)))?;
        Self::shape(stored)
    }

    /// Update an employee (merge, not replace)
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<EmployeeResponse> {
        let record_id = parse_employee_id(id)?;
        self.fetch(&record_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        if data.is_empty() {
            return Err(RepoError::Validation(
                "No data provided for update".to_string(),
            ));
        }

        // Check duplicate email if changing
        if let Some(ref email) = data.email
            && self.email_taken_by_other(email, &record_id).await?
        {
            return Err(RepoError::Duplicate(format!(
                "Employee with email '{}' already exists",
                email
            )));
        }

        // MERGE leaves absent fields untouched
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id.clone()))
            .bind(("data", data))
            .await?;

        let updated = self
            .fetch(&record_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;
        Self::shape(updated)
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let record_id = parse_employee_id(id)?;
        self.fetch(&record_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", record_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_plain_string() {
        assert!(matches!(
            parse_employee_id("invalid_id"),
            Err(RepoError::Validation(_))
        ));
    }

    #[test]
    fn parse_rejects_other_table() {
        assert!(matches!(
            parse_employee_id("product:abc"),
            Err(RepoError::Validation(_))
        ));
    }

    #[test]
    fn parse_accepts_employee_record_id() {
        let id = parse_employee_id("employee:abc").unwrap();
        assert_eq!(id.to_string(), "employee:abc");
    }
}
