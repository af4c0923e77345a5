//! Employee API Handlers
//!
//! Thin glue: extract typed input, call the repository, shape the response.
//! Validation of the request body shape happens in the `Json` extractor
//! (422 on missing or mistyped fields, before any store access).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::utils::{AppError, AppResult};

/// Confirmation body for DELETE
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /employees - list all employees in store order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employees = repo.find_all().await?;
    Ok(Json(employees))
}

/// GET /employees/{id} - get a single employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee))
}

/// POST /employees - create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employees/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    let employee = repo.update(&id, payload).await?;
    Ok(Json(employee))
}

/// DELETE /employees/{id} - remove an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let repo = EmployeeRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Employee deleted successfully".to_string(),
    }))
}
