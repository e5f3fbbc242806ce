//! Alert routes for dashboard notifications.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, patch},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{
    AppState,
    response::{ApiFailure, ApiResponse},
};
use hostelops_db::entities::{alerts, sea_orm_active_enums::AlertSeverity};
use hostelops_db::repositories::alert::{
    AlertError, AlertFilter, AlertRepository, CreateAlertInput,
};
use hostelops_shared::AppError;
use hostelops_shared::types::{PageRequest, PageResponse};

/// Creates the alert routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", get(list_alerts).post(create_alert))
        .route("/alerts/{id}", get(get_alert).delete(delete_alert))
        .route("/alerts/{id}/resolve", patch(resolve_alert))
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Request body for creating an alert.
#[derive(Debug, Deserialize)]
pub struct CreateAlertRequest {
    /// Short headline.
    pub title: String,
    /// Full alert text.
    pub message: String,
    /// Severity level (defaults to info).
    #[serde(default = "default_severity")]
    pub severity: AlertSeverity,
}

fn default_severity() -> AlertSeverity {
    AlertSeverity::Info
}

/// Query parameters for listing alerts.
#[derive(Debug, Deserialize)]
pub struct ListAlertsQuery {
    /// Restrict to one severity.
    pub severity: Option<AlertSeverity>,
    /// Restrict to resolved/unresolved alerts.
    pub resolved: Option<bool>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// One alert in API responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    /// Alert ID.
    pub id: Uuid,
    /// Short headline.
    pub title: String,
    /// Full alert text.
    pub message: String,
    /// Severity level.
    pub severity: AlertSeverity,
    /// Whether the alert has been resolved.
    pub resolved: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

fn alert_to_response(alert: &alerts::Model) -> AlertResponse {
    AlertResponse {
        id: alert.id,
        title: alert.title.clone(),
        message: alert.message.clone(),
        severity: alert.severity,
        resolved: alert.resolved,
        created_at: alert.created_at.to_utc(),
        updated_at: alert.updated_at.to_utc(),
    }
}

fn map_alert_error(e: &AlertError, action: &str) -> Response {
    match e {
        AlertError::NotFound(_) => ApiFailure::not_found("Alert not found"),
        AlertError::Database(_) => {
            error!(error = %e, "Failed to {action} alert");
            ApiFailure::from_app_error(&AppError::Database(format!("Failed to {action} alert")))
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /alerts
#[axum::debug_handler]
async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<ListAlertsQuery>,
) -> impl IntoResponse {
    let repo = AlertRepository::new((*state.db).clone());
    let filter = AlertFilter {
        severity: query.severity,
        resolved: query.resolved,
    };

    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    match repo.list(&filter, &page).await {
        Ok((items, total)) => {
            let data = PageResponse::new(
                items.iter().map(alert_to_response).collect(),
                page.page,
                page.per_page,
                total,
            );
            ApiResponse::ok(data, "Alerts listed")
        }
        Err(e) => map_alert_error(&e, "list"),
    }
}

/// POST /alerts
#[axum::debug_handler]
async fn create_alert(
    State(state): State<AppState>,
    Json(request): Json<CreateAlertRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty() {
        return ApiFailure::bad_request("Title must not be empty");
    }
    if request.message.trim().is_empty() {
        return ApiFailure::bad_request("Message must not be empty");
    }

    let repo = AlertRepository::new((*state.db).clone());
    let input = CreateAlertInput {
        title: request.title,
        message: request.message,
        severity: request.severity,
    };

    match repo.create(input).await {
        Ok(alert) => ApiResponse::ok(alert_to_response(&alert), "Alert created"),
        Err(e) => map_alert_error(&e, "create"),
    }
}

/// GET /alerts/{id}
#[axum::debug_handler]
async fn get_alert(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = AlertRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(alert)) => ApiResponse::ok(alert_to_response(&alert), "Alert found"),
        Ok(None) => ApiFailure::not_found("Alert not found"),
        Err(e) => map_alert_error(&e, "fetch"),
    }
}

/// PATCH /alerts/{id}/resolve
#[axum::debug_handler]
async fn resolve_alert(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = AlertRepository::new((*state.db).clone());

    match repo.resolve(id).await {
        Ok(alert) => ApiResponse::ok(alert_to_response(&alert), "Alert resolved"),
        Err(e) => map_alert_error(&e, "resolve"),
    }
}

/// DELETE /alerts/{id}
#[axum::debug_handler]
async fn delete_alert(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = AlertRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => ApiResponse::ok(serde_json::json!({"id": id}), "Alert deleted"),
        Err(e) => map_alert_error(&e, "delete"),
    }
}
