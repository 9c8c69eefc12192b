//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer. Protected handlers take an [`AuthenticatedUser`] before any other
//! extractor so missing credentials are reported ahead of malformed input.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};

use super::auth::AuthenticatedUser;
use super::dto::{
    ActualizarMateriaInput, HealthResponse, IdQuery, Materia, MateriaActualizadaResponse,
    MateriaCreadaResponse, MateriaEliminadaResponse, MateriaEstadisticas, MateriaInput,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::MateriaRepository;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Materia CRUD
// =============================================================================

/// GET /v1/lista-materias
pub async fn list_materias(
    AuthenticatedUser(_user): AuthenticatedUser,
    State(state): State<AppState>,
) -> HandlerResult<Vec<Materia>> {
    let materias = services::list_materias(state.repository.as_ref()).await?;
    Ok(Json(materias))
}

/// GET /v1/materias?id=N
pub async fn get_materia(
    AuthenticatedUser(_user): AuthenticatedUser,
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> HandlerResult<Materia> {
    let Query(query) = query?;
    let materia = services::get_materia(state.repository.as_ref(), query.id).await?;
    Ok(Json(materia))
}

/// POST /v1/materias
///
/// Open unless the authenticator is configured to require credentials here.
pub async fn create_materia(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<MateriaInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MateriaCreadaResponse>), AppError> {
    if state.auth.create_requires_auth() {
        state.auth.authenticate(&headers)?;
    }
    let Json(input) = payload?;

    let id = services::create_materia(state.repository.as_ref(), &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MateriaCreadaResponse {
            materia_created_id: id,
        }),
    ))
}

/// PUT /v1/materias
///
/// Full overwrite; the target id travels in the body.
pub async fn update_materia(
    AuthenticatedUser(user): AuthenticatedUser,
    State(state): State<AppState>,
    payload: Result<Json<ActualizarMateriaInput>, JsonRejection>,
) -> HandlerResult<MateriaActualizadaResponse> {
    let Json(input) = payload?;
    let materia = services::update_materia(state.repository.as_ref(), &input).await?;
    tracing::info!(subject = %user.subject, id = %materia.id, "materia updated");

    Ok(Json(MateriaActualizadaResponse {
        message: services::MATERIA_ACTUALIZADA.to_string(),
        materia,
    }))
}

/// DELETE /v1/materias?id=N
pub async fn delete_materia(
    AuthenticatedUser(user): AuthenticatedUser,
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> HandlerResult<MateriaEliminadaResponse> {
    let Query(query) = query?;
    services::delete_materia(state.repository.as_ref(), query.id).await?;
    tracing::info!(subject = %user.subject, id = ?query.id, "materia deleted");

    Ok(Json(MateriaEliminadaResponse {
        details: services::MATERIA_ELIMINADA.to_string(),
    }))
}

// =============================================================================
// Statistics
// =============================================================================

/// GET /v1/total-materias
pub async fn total_materias(
    AuthenticatedUser(_user): AuthenticatedUser,
    State(state): State<AppState>,
) -> HandlerResult<MateriaEstadisticas> {
    let stats =
        services::compute_estadisticas(state.repository.as_ref(), state.catalog.as_ref()).await?;
    Ok(Json(stats))
}
