//! Data Transfer Objects for the HTTP API.
//!
//! Request payloads and domain objects are re-exported from [`crate::api`];
//! the types below only wrap them into response envelopes.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    ActualizarMateriaInput, Materia, MateriaEstadisticas, MateriaId, MateriaInput,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// `?id=N` query string. A missing id is answered with 404.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<MateriaId>,
}

/// Response for materia creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MateriaCreadaResponse {
    pub materia_created_id: MateriaId,
}

/// Response for a full materia update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MateriaActualizadaResponse {
    pub message: String,
    pub materia: Materia,
}

/// Response for a materia deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MateriaEliminadaResponse {
    pub details: String,
}
