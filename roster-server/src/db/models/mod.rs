//! Database models

pub mod employee;
pub mod serde_helpers;

pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeResponse, EmployeeUpdate};
