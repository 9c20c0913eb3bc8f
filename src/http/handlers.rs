//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one endpoint and performs exactly one
//! storage operation through the service layer.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{AutoDto, AutoPayload, HealthResponse, MessageResponse};
use super::error::AppError;
use super::state::AppState;
use crate::api::AutoId;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Unwrap a JSON body, turning axum's rejection into the 400 policy.
///
/// Missing keys, wrong types, and syntactically invalid JSON all land
/// here instead of axum's default plain-text rejection.
fn require_payload(
    payload: Result<Json<AutoPayload>, JsonRejection>,
) -> Result<AutoPayload, AppError> {
    payload
        .map(|Json(p)| p)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
}

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// POST /autos
///
/// Create a new auto from a `{marca, modelo}` body.
pub async fn create_auto(
    State(state): State<AppState>,
    payload: Result<Json<AutoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let payload = require_payload(payload)?;

    db_services::create_auto(state.repository.as_ref(), &payload.marca, &payload.modelo).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Auto creado")),
    ))
}

/// GET /autos
///
/// List every stored auto. An empty table yields an empty array.
pub async fn list_autos(State(state): State<AppState>) -> HandlerResult<Vec<AutoDto>> {
    let autos = db_services::list_autos(state.repository.as_ref()).await?;

    Ok(Json(autos.into_iter().map(Into::into).collect()))
}

/// GET /autos/{id}
///
/// Fetch a single auto by id.
pub async fn get_auto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<AutoDto> {
    let auto = db_services::get_auto(state.repository.as_ref(), AutoId::new(id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(auto.into()))
}

/// PUT /autos/{id}
///
/// Replace both fields of an existing auto.
pub async fn update_auto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<AutoPayload>, JsonRejection>,
) -> HandlerResult<MessageResponse> {
    let payload = require_payload(payload)?;

    let updated = db_services::update_auto(
        state.repository.as_ref(),
        AutoId::new(id),
        &payload.marca,
        &payload.modelo,
    )
    .await?;

    if !updated {
        return Err(AppError::NotFound);
    }

    Ok(Json(MessageResponse::new("Auto actualizado")))
}

/// DELETE /autos/{id}
///
/// Delete an auto by id.
pub async fn delete_auto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<MessageResponse> {
    let deleted = db_services::delete_auto(state.repository.as_ref(), AutoId::new(id)).await?;

    if !deleted {
        return Err(AppError::NotFound);
    }

    Ok(Json(MessageResponse::new("Auto eliminado")))
}
