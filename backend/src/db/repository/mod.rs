//! Repository trait definitions for database operations.
//!
//! - [`error`]: Error types for repository operations
//! - [`materia`]: CRUD operations for materias
//! - [`estadisticas`]: Aggregate queries for the statistics report
//!
//! Handlers and services take the composite [`FullRepository`] so that any
//! backend (in-memory or Postgres) can be injected.

pub mod error;
pub mod estadisticas;
pub mod materia;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use estadisticas::EstadisticasRepository;
pub use materia::MateriaRepository;

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: MateriaRepository + EstadisticasRepository {}

// Blanket implementation: any type implementing both traits is a FullRepository
impl<T> FullRepository for T where T: MateriaRepository + EstadisticasRepository {}
