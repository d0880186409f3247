//! Route handlers
//!
//! Thin adapters: extract, call the directory, wrap the result.
//!
//! Directory calls may fsync a journal, so they run on the blocking pool
//! rather than on the async workers.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde_json::{json, Value};

use crate::directory::Directory;
use crate::error::DirectoryError;
use crate::model::{Compensation, CompensationRequest, Employee, EmployeeDraft, ReportingStructure};
use super::response::ApiError;

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Run a directory operation on the blocking thread pool
async fn blocking<T, F>(op: F) -> ApiResult<T>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| ApiError(DirectoryError::Internal(format!("directory task failed: {}", e))))?
        .map_err(ApiError::from)
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

/// POST /employee
pub async fn create_employee(
    Extension(directory): Extension<Directory>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(draft) = body?;
    Ok(Json(blocking(move || directory.create_employee(draft)).await?))
}

/// GET /employee/:id
pub async fn get_employee(
    Extension(directory): Extension<Directory>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    Ok(Json(blocking(move || directory.get_employee(&id)).await?))
}

/// PUT /employee/:id
pub async fn update_employee(
    Extension(directory): Extension<Directory>,
    Path(id): Path<String>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(draft) = body?;
    Ok(Json(blocking(move || directory.update_employee(&id, draft)).await?))
}

/// GET /employee/:id/reporting-structure
pub async fn reporting_structure(
    Extension(directory): Extension<Directory>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReportingStructure>> {
    Ok(Json(blocking(move || directory.reporting_structure(&id)).await?))
}

/// GET /employee/:id/compensation
pub async fn get_compensation(
    Extension(directory): Extension<Directory>,
    Path(id): Path<String>,
) -> ApiResult<Json<Compensation>> {
    Ok(Json(blocking(move || directory.get_compensation(&id)).await?))
}

/// POST /employee/:id/compensation
pub async fn create_compensation(
    Extension(directory): Extension<Directory>,
    Path(id): Path<String>,
    body: Result<Json<CompensationRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Compensation>)> {
    let Json(request) = body?;
    let created = blocking(move || directory.create_compensation(&id, request)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employee/:id/compensation
pub async fn update_compensation(
    Extension(directory): Extension<Directory>,
    Path(id): Path<String>,
    body: Result<Json<CompensationRequest>, JsonRejection>,
) -> ApiResult<Json<Compensation>> {
    let Json(request) = body?;
    Ok(Json(blocking(move || directory.update_compensation(&id, request)).await?))
}
