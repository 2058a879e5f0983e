//! HTTP request handlers for the employee payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{AmountInput, Deductions, Employee};
use crate::payroll::{calculate_deductions, parse_gross_salary};

use super::request::{
    CountryQuery, DeductionsQuery, DeductionsRequest, EmployeeRequest, JobTitleQuery, non_blank,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/up", get(health_handler))
        .route("/employees", get(list_handler).post(create_handler))
        .route(
            "/employees/salary_metrics_by_country",
            get(country_metrics_handler),
        )
        .route(
            "/employees/salary_metrics_by_job_title",
            get(job_title_metrics_handler),
        )
        .route(
            "/employees/:id",
            get(show_handler)
                .put(update_handler)
                .patch(update_handler)
                .delete(delete_handler),
        )
        .route("/employees/:id/deductions", post(deductions_handler))
        .with_state(state)
}

/// Handler for GET /up.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for GET /employees.
async fn list_handler(State(state): State<AppState>) -> HandlerResult<Json<Vec<Employee>>> {
    let employees = state.store().list().await?;
    Ok(Json(employees))
}

/// Handler for GET /employees/:id.
async fn show_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> HandlerResult<Json<Employee>> {
    let id = resolve_id(id)?;
    Ok(Json(state.store().get(id).await?))
}

/// Handler for POST /employees.
///
/// Responds 201 with the stored record, or 422 with every violated rule.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> HandlerResult<(StatusCode, Json<Employee>)> {
    let correlation_id = Uuid::new_v4();
    let request = read_json(payload, correlation_id)?;

    match state.store().create(request.employee).await {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                "Create request completed"
            );
            Ok((StatusCode::CREATED, Json(employee)))
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Create request rejected");
            Err(err.into())
        }
    }
}

/// Handler for PUT|PATCH /employees/:id.
///
/// Only the supplied attributes change; the merged record is re-validated.
async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> HandlerResult<Json<Employee>> {
    let correlation_id = Uuid::new_v4();
    let id = resolve_id(id)?;
    // Unknown ids answer 404 even when the body is unusable.
    state.store().get(id).await?;
    let request = read_json(payload, correlation_id)?;

    match state.store().update(id, request.employee).await {
        Ok(employee) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Update request completed");
            Ok(Json(employee))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = id,
                error = %err,
                "Update request rejected"
            );
            Err(err.into())
        }
    }
}

/// Handler for DELETE /employees/:id.
async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> HandlerResult<StatusCode> {
    let id = resolve_id(id)?;
    state.store().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /employees/salary_metrics_by_country?country=...
async fn country_metrics_handler(
    State(state): State<AppState>,
    Query(query): Query<CountryQuery>,
) -> HandlerResult<impl IntoResponse> {
    let country = non_blank(query.country).ok_or_else(|| PayrollError::missing("country"))?;
    let metrics = state.store().salary_metrics_by_country(&country).await?;
    Ok(Json(metrics))
}

/// Handler for GET /employees/salary_metrics_by_job_title?job_title=...
async fn job_title_metrics_handler(
    State(state): State<AppState>,
    Query(query): Query<JobTitleQuery>,
) -> HandlerResult<impl IntoResponse> {
    let job_title =
        non_blank(query.job_title).ok_or_else(|| PayrollError::missing("job_title"))?;
    let metrics = state.store().salary_metrics_by_job_title(&job_title).await?;
    Ok(Json(metrics))
}

/// Handler for POST /employees/:id/deductions.
///
/// Resolves the employee's stored country, then runs the calculator on the
/// supplied `gross_salary` (JSON body first, query string second).
async fn deductions_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    Query(query): Query<DeductionsQuery>,
    payload: Result<Json<DeductionsRequest>, JsonRejection>,
) -> HandlerResult<Json<Deductions>> {
    let correlation_id = Uuid::new_v4();
    let id = resolve_id(id)?;
    let employee = state.store().get(id).await?;

    let body_gross = match payload {
        Ok(Json(body)) => body.gross_salary,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) if query.gross_salary.is_none() => {
            return Err(json_rejection(rejection, correlation_id));
        }
        Err(_) => None,
    };
    let gross = body_gross
        .or_else(|| query.gross_salary.map(AmountInput::Text))
        .ok_or_else(|| PayrollError::missing("gross_salary"))?;

    let gross = parse_gross_salary(&gross).inspect_err(|err| {
        warn!(correlation_id = %correlation_id, employee_id = id, error = %err, "Bad gross salary");
    })?;
    let deductions = calculate_deductions(&employee.country, gross).for_employee(employee.id);

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        country = %employee.country,
        gross_salary = %deductions.gross_salary,
        tax = %deductions.tax,
        net_salary = %deductions.net_salary,
        "Deductions calculated"
    );
    Ok(Json(deductions))
}

/// Maps an unparseable `:id` segment to the same 404 an unknown id gets.
fn resolve_id(id: Result<Path<u64>, PathRejection>) -> HandlerResult<u64> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ApiErrorResponse::new(
            StatusCode::NOT_FOUND,
            ApiError::with_details("NOT_FOUND", "Employee not found", rejection.body_text()),
        )),
    }
}

fn read_json<T>(payload: Result<Json<T>, JsonRejection>, correlation_id: Uuid) -> HandlerResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| json_rejection(rejection, correlation_id))
}

fn json_rejection(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("MISSING_PARAMETER", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EmployeeStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(EmployeeStore::in_memory())
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = send(create_router(create_test_state()), "GET", "/up", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "POST", "/employees", Some("{ invalid json }")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_employee_key_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "POST", "/employees", Some(r#"{"first_name":"A"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_PARAMETER");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/employees")
                    .body(Body::from(r#"{"employee":{}}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let router = create_router(create_test_state());
        let (status, body) = send(router, "GET", "/employees/abc", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_blank_country_query_returns_400() {
        let router = create_router(create_test_state());
        let (status, body) = send(
            router,
            "GET",
            "/employees/salary_metrics_by_country?country=%20%20",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.message, "country is required");
    }
}
