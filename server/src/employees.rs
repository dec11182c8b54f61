//! `/api/v1` employee routes.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use platform_api::{ApiError, ApiResult};
use products_hr::{Employee, EmployeeId, HrError};

use crate::http::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees))
        .route("/add-employee", post(add_employee))
        .route(
            "/employees/{employee_id}",
            get(employee_by_id)
                .put(update_employee)
                .delete(delete_employee),
        )
}

/// Both not-found kinds answer 404; the body `code` tells them apart.
fn hr_error(err: HrError) -> ApiError {
    match err {
        HrError::InvalidState(message) => ApiError::not_found("INVALID_STATE", message),
        HrError::ResourceNotFound(message) => {
            ApiError::not_found("RESOURCE_NOT_FOUND", message)
        }
        HrError::Storage(err) => ApiError::internal(err),
    }
}

fn employee_id(path: Result<Path<EmployeeId>, PathRejection>) -> ApiResult<EmployeeId> {
    let Path(id) = path.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    Ok(id)
}

fn payload(body: Result<Json<Employee>, JsonRejection>) -> ApiResult<Employee> {
    let Json(employee) = body.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    Ok(employee)
}

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.employees.list_employees().await.map_err(hr_error)?;
    Ok(Json(employees))
}

async fn add_employee(
    State(state): State<AppState>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<StatusCode> {
    state
        .employees
        .add_employee(payload(body)?)
        .await
        .map_err(hr_error)?;
    Ok(StatusCode::OK)
}

async fn employee_by_id(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<Json<Option<Employee>>> {
    let employee = state
        .employees
        .employee_by_id(employee_id(path)?)
        .await
        .map_err(hr_error)?;
    Ok(Json(employee))
}

async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
    body: Result<Json<Employee>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let id = employee_id(path)?;
    let updated = state
        .employees
        .update_employee(id, payload(body)?)
        .await
        .map_err(hr_error)?;
    Ok(Json(updated))
}

async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<EmployeeId>, PathRejection>,
) -> ApiResult<StatusCode> {
    state
        .employees
        .delete_employee(employee_id(path)?)
        .await
        .map_err(hr_error)?;
    Ok(StatusCode::OK)
}
