//! # Escolar API
//!
//! Backend for the course (materia) administration of a school-scheduling
//! system: create, list, fetch, update and delete materias, plus aggregate
//! statistics by educational program and weekday.
//!
//! ## Architecture
//!
//! - [`api`]: types exchanged with clients
//! - [`models`]: domain types and the stored day-set codec
//! - [`db`]: repository traits, the in-memory and Postgres backends, and
//!   their construction from configuration
//! - [`services`]: validation, CRUD orchestration and statistics
//! - [`http`]: axum router, handlers and authentication (feature `http-server`)
//!
//! ## Features
//!
//! - `local-repo` (default): in-memory repository
//! - `postgres-repo`: Diesel + r2d2 Postgres repository
//! - `http-server` (default): the REST API and the `escolar-server` binary

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
