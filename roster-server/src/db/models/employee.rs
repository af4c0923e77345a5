//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee record matching the store schema
///
/// `id` is `None` only before insertion; the store assigns it at CREATE and
/// it is immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
}

/// Create employee payload
///
/// Every field except `hire_date` is required; a missing or mistyped field
/// is rejected at the extractor boundary before any store access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: Option<DateTime<Utc>>,
}

/// Update employee payload — absent fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl EmployeeUpdate {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.salary.is_none()
    }
}

/// Employee record shaped for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_missing_email() {
        let result: Result<EmployeeCreate, _> = serde_json::from_str(
            r#"{"name":"A","department":"D","position":"P","salary":100}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_mistyped_salary() {
        let result: Result<EmployeeCreate, _> = serde_json::from_str(
            r#"{"name":"A","email":"a@x.com","department":"D","position":"P","salary":"high"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_hire_date_defaults_to_none() {
        let input: EmployeeCreate = serde_json::from_str(
            r#"{"name":"A","email":"a@x.com","department":"D","position":"P","salary":100}"#,
        )
        .unwrap();
        assert!(input.hire_date.is_none());
        assert_eq!(input.salary, 100.0);
    }

    #[test]
    fn update_all_fields_optional() {
        let input: EmployeeUpdate = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn update_partial_fields() {
        let input: EmployeeUpdate = serde_json::from_str(r#"{"salary":200}"#).unwrap();
        assert!(!input.is_empty());
        assert_eq!(input.salary, Some(200.0));
        assert!(input.name.is_none());
    }

    #[test]
    fn update_serializes_only_supplied_fields() {
        let input: EmployeeUpdate = serde_json::from_str(r#"{"salary":200}"#).unwrap();
        let json = serde_json::to_value(&input).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["salary"], 200.0);
    }

    #[test]
    fn employee_id_serializes_as_string() {
        let employee = Employee {
            id: Some(RecordId::from_table_key("employee", "abc")),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            department: "D".to_string(),
            position: "P".to_string(),
            salary: 100.0,
            hire_date: Utc::now(),
        };
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], "employee:abc");
    }
}
