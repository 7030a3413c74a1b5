use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Employee, EmployeeId, Position};
use super::service::{DirectoryError, EmployeeRegistry};
use super::store::EmployeeStore;

/// Router builder exposing the registry over HTTP. Everything under
/// `/api/v1/employees`; the boundary decodes payloads and query parameters,
/// the service produces the typed outcome, and `DirectoryError`'s
/// `IntoResponse` impl assigns the status code.
pub fn employee_router<S>(service: Arc<EmployeeRegistry<S>>) -> Router
where
    S: EmployeeStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route(
            "/api/v1/employees/search/position",
            get(position_search_handler::<S>),
        )
        .route("/api/v1/employees/search/age", get(age_search_handler::<S>))
        .route(
            "/api/v1/employees/leave/exhausted",
            get(exhausted_leave_handler::<S>),
        )
        .route(
            "/api/v1/employees/:id",
            get(fetch_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .route(
            "/api/v1/employees/:id/annual-leave",
            put(annual_leave_handler::<S>),
        )
        .route("/api/v1/employees/:id/promote", put(promote_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PositionQuery {
    pub(crate) position: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AgeRangeQuery {
    pub(crate) min_age: u8,
    pub(crate) max_age: u8,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromoteQuery {
    pub(crate) supervisor_id: String,
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.list() {
        Ok(employees) => (StatusCode::OK, axum::Json(employees)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    axum::Json(candidate): axum::Json<Employee>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.insert(candidate) {
        Ok(_) => (
            StatusCode::CREATED,
            axum::Json(json!({ "message": "employee added successfully" })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn fetch_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.find_by_id(&EmployeeId(id)) {
        Ok(employee) => (StatusCode::OK, axum::Json(employee)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Path(id): Path<String>,
    axum::Json(candidate): axum::Json<Employee>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.replace(&EmployeeId(id), candidate) {
        Ok(_) => (
            StatusCode::OK,
            axum::Json(json!({ "message": "employee updated successfully" })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.delete(&EmployeeId(id)) {
        Ok(()) => (
            StatusCode::OK,
            axum::Json(json!({ "message": "employee deleted successfully" })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn position_search_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Query(query): Query<PositionQuery>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    let Some(position) = Position::from_label(&query.position) else {
        return (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "position must be either supervisor or coordinator"
            })),
        )
            .into_response();
    };

    match service.filter_by_position(position) {
        Ok(employees) => (StatusCode::OK, axum::Json(employees)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn age_search_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Query(query): Query<AgeRangeQuery>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    let valid_bound = |age: u8| (26..=65).contains(&age);
    if !valid_bound(query.min_age) || !valid_bound(query.max_age) {
        return (
            StatusCode::BAD_REQUEST,
            axum::Json(json!({
                "error": "minAge and maxAge must be between 26 and 65"
            })),
        )
            .into_response();
    }

    match service.filter_by_age_range(query.min_age, query.max_age) {
        Ok(employees) => (StatusCode::OK, axum::Json(employees)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn exhausted_leave_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.exhausted_leave() {
        Ok(employees) => (StatusCode::OK, axum::Json(employees)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn annual_leave_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.apply_annual_leave(&EmployeeId(id)) {
        Ok(employee) => (
            StatusCode::OK,
            axum::Json(json!({
                "message": "annual leave applied successfully",
                "employee": employee,
            })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn promote_handler<S>(
    State(service): State<Arc<EmployeeRegistry<S>>>,
    Path(target_id): Path<String>,
    Query(query): Query<PromoteQuery>,
) -> Response
where
    S: EmployeeStore + 'static,
{
    match service.promote(&EmployeeId(query.supervisor_id), &EmployeeId(target_id)) {
        Ok(employee) => (
            StatusCode::OK,
            axum::Json(json!({
                "message": "employee promoted to supervisor",
                "employee": employee,
            })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match self {
            DirectoryError::Invalid(_)
            | DirectoryError::AlreadyOnLeave
            | DirectoryError::InsufficientLeave
            | DirectoryError::Unauthorized
            | DirectoryError::AlreadySupervisor
            | DirectoryError::CriteriaNotMet => StatusCode::BAD_REQUEST,
            DirectoryError::NotFound | DirectoryError::NoMatches => StatusCode::NOT_FOUND,
            DirectoryError::DuplicateId => StatusCode::CONFLICT,
            DirectoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = axum::Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
