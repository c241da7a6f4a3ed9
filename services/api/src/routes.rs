use crate::infra::{AppState, ServiceError, SheetService};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use full_course::{ChallengeEntry, ChallengeId, CourseId, EntryUpdate, UserSettings};

/// One line of the challenge listing.
#[derive(Debug, Serialize)]
pub(crate) struct ChallengeOverview {
    pub(crate) id: u16,
    pub(crate) description: &'static str,
    pub(crate) courses: Vec<CourseId>,
    pub(crate) has_record: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChallengeDetail {
    pub(crate) description: &'static str,
    pub(crate) entry: ChallengeEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    pub(crate) course: CourseId,
}

pub(crate) fn with_service_routes(service: Arc<SheetService>) -> Router {
    sheet_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

/// Router builder exposing the progress-sheet endpoints.
pub(crate) fn sheet_router(service: Arc<SheetService>) -> Router {
    Router::new()
        .route("/api/v1/challenges", get(list_challenges))
        .route(
            "/api/v1/challenges/:id",
            get(challenge_detail).post(update_challenge),
        )
        .route("/api/v1/challenges/:id/evaluate", post(evaluate_challenge))
        .route("/api/v1/settings", get(get_settings).put(put_settings))
        .route("/api/v1/sheet", get(active_sheet))
        .route("/api/v1/sheet/reset", post(reset_sheet))
        .route("/api/v1/sheet/sync", post(sync_sheet))
        .with_state(service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_challenges(
    State(service): State<Arc<SheetService>>,
) -> Json<Vec<ChallengeOverview>> {
    let entries = service.entries();
    let listing = entries
        .values()
        .map(|entry| ChallengeOverview {
            id: entry.id.0,
            description: service
                .catalog()
                .challenge(entry.id)
                .map(|challenge| challenge.description)
                .unwrap_or(""),
            courses: entry.courses.clone(),
            has_record: entry.anime.is_some(),
        })
        .collect();
    Json(listing)
}

pub(crate) async fn challenge_detail(
    State(service): State<Arc<SheetService>>,
    Path(id): Path<u16>,
) -> Response {
    let id = ChallengeId(id);
    let Some(entry) = service.entry(id) else {
        return not_found(id);
    };
    let description = service
        .catalog()
        .challenge(id)
        .map(|challenge| challenge.description)
        .unwrap_or("");
    (StatusCode::OK, Json(ChallengeDetail { description, entry })).into_response()
}

pub(crate) async fn update_challenge(
    State(service): State<Arc<SheetService>>,
    Path(id): Path<u16>,
    Json(update): Json<EntryUpdate>,
) -> Response {
    let id = ChallengeId(id);
    match service.update(id, update) {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(ServiceError::UnknownChallenge(id)) => not_found(id),
        Err(err) => unprocessable(err),
    }
}

pub(crate) async fn evaluate_challenge(
    State(service): State<Arc<SheetService>>,
    Path(id): Path<u16>,
    Json(request): Json<EvaluateRequest>,
) -> Response {
    let id = ChallengeId(id);
    if service.entry(id).is_none() {
        return not_found(id);
    }
    let verdict = service.judge(id, request.course);
    (StatusCode::OK, Json(verdict)).into_response()
}

pub(crate) async fn get_settings(State(service): State<Arc<SheetService>>) -> Json<UserSettings> {
    Json(service.settings())
}

pub(crate) async fn put_settings(
    State(service): State<Arc<SheetService>>,
    Json(settings): Json<UserSettings>,
) -> Response {
    match service.put_settings(settings) {
        Ok(()) => (StatusCode::OK, Json(service.settings())).into_response(),
        Err(err) => unprocessable(err),
    }
}

pub(crate) async fn active_sheet(State(service): State<Arc<SheetService>>) -> Response {
    (StatusCode::OK, Json(service.active_sheet())).into_response()
}

pub(crate) async fn reset_sheet(State(service): State<Arc<SheetService>>) -> Response {
    let entries = service.reset();
    (StatusCode::OK, Json(json!({ "entries": entries }))).into_response()
}

pub(crate) async fn sync_sheet(State(service): State<Arc<SheetService>>) -> Response {
    let entries = service.sync();
    (StatusCode::OK, Json(json!({ "entries": entries }))).into_response()
}

fn not_found(id: ChallengeId) -> Response {
    let payload = json!({ "error": format!("no challenge numbered {id}") });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn unprocessable(err: ServiceError) -> Response {
    let payload = json!({ "error": err.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
