//! Route table and handlers.

use super::{ApiError, AppState, auth::authenticate};
use crate::{
    analytics::domain::DashboardStats,
    classification::domain::{ClassificationResult, Department},
    identity::ports::PrincipalDirectory,
    notification::{domain::Notification, ports::NotificationRepository},
    ticket::{
        domain::Ticket,
        ports::TicketRepository,
        services::{SubmitComplaintRequest, TransitionTicketRequest},
    },
};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

type SharedState<R, N, C, D> = Arc<AppState<R, N, C, D>>;

/// Builds the `/api` router over `state`.
pub fn router<R, N, C, D>(state: AppState<R, N, C, D>) -> Router
where
    R: TicketRepository + 'static,
    N: NotificationRepository + 'static,
    C: Clock + Send + Sync + 'static,
    D: PrincipalDirectory + 'static,
{
    let api = Router::new()
        .route("/health", get(health))
        .route("/departments", get(departments))
        .route("/complaints", get(list_complaints::<R, N, C, D>))
        .route("/complaints/submit", post(submit_complaint::<R, N, C, D>))
        .route("/complaints/:id", get(get_complaint::<R, N, C, D>))
        .route("/complaints/:id/status", put(update_status::<R, N, C, D>))
        .route("/nlp/classify", post(classify_text::<R, N, C, D>))
        .route("/analytics", get(analytics::<R, N, C, D>))
        .route("/notifications", get(list_notifications::<R, N, C, D>))
        .route(
            "/notifications/:id/read",
            put(mark_notification_read::<R, N, C, D>),
        );

    Router::new()
        .nest("/api", api)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct DepartmentView {
    code: &'static str,
    name: &'static str,
}

#[derive(Deserialize)]
struct UpdateStatusBody {
    status: String,
    #[serde(default)]
    comment: Option<String>,
}

#[derive(Deserialize)]
struct ClassifyBody {
    text: String,
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "grievance service running",
    })
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
async fn departments() -> Json<Vec<DepartmentView>> {
    Json(
        Department::ALL
            .iter()
            .map(|department| DepartmentView {
                code: department.as_str(),
                name: department.label(),
            })
            .collect(),
    )
}

async fn submit_complaint<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
    payload: Result<Json<SubmitComplaintRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Ticket>), ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    let request = body(payload)?;
    let ticket = state.intake.submit(&principal, request).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

async fn list_complaints<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Ticket>>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    Ok(Json(state.lifecycle.list(&principal).await?))
}

async fn get_complaint<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    Ok(Json(state.lifecycle.find(&principal, &id).await?))
}

async fn update_status<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> Result<Json<Ticket>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    let UpdateStatusBody { status, comment } = body(payload)?;
    let mut request = TransitionTicketRequest::new(id, status);
    if let Some(text) = comment {
        request = request.with_comment(text);
    }
    Ok(Json(state.lifecycle.transition(&principal, request).await?))
}

async fn classify_text<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
    payload: Result<Json<ClassifyBody>, JsonRejection>,
) -> Result<Json<ClassificationResult>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    authenticate(&*state.directory, &headers).await?;
    let ClassifyBody { text } = body(payload)?;
    Ok(Json(state.intake.classify_text(&text)?))
}

async fn analytics<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
) -> Result<Json<DashboardStats>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    Ok(Json(state.analytics.dashboard(&principal).await?))
}

async fn list_notifications<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Notification>>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    Ok(Json(state.notifications.list(&principal).await?))
}

async fn mark_notification_read<R, N, C, D>(
    State(state): State<SharedState<R, N, C, D>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Notification>, ApiError>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    let principal = authenticate(&*state.directory, &headers).await?;
    Ok(Json(state.notifications.mark_read(&principal, &id).await?))
}
