//! Core materia repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Materia, MateriaId, NewMateria};

/// CRUD operations over the materia table.
///
/// Write operations are atomic: either the whole row is written or nothing
/// is. Implementations must enforce nrc uniqueness on write and report a
/// violation as `RepositoryError::ConflictError`.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait MateriaRepository: Send + Sync {
    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Fetch one materia by primary key.
    ///
    /// # Returns
    /// * `Ok(Materia)` - with `dias_semana` decoded (unreadable data becomes an empty list)
    /// * `Err(RepositoryError::NotFound)` - If no row has this id
    async fn get_materia(&self, id: MateriaId) -> RepositoryResult<Materia>;

    /// Whether any materia already uses this nrc.
    async fn nrc_exists(&self, nrc: &str) -> RepositoryResult<bool>;

    /// Insert a new materia inside a single transaction.
    ///
    /// # Returns
    /// * `Ok(MateriaId)` - The id assigned by the backend
    /// * `Err(RepositoryError::ConflictError)` - If the nrc is already taken
    async fn insert_materia(&self, materia: &NewMateria) -> RepositoryResult<MateriaId>;

    /// Overwrite every field of an existing materia inside a single transaction.
    ///
    /// # Returns
    /// * `Ok(Materia)` - The row as stored after the update
    /// * `Err(RepositoryError::NotFound)` - If no row has this id
    /// * `Err(RepositoryError::ConflictError)` - If the new nrc belongs to another row
    async fn update_materia(&self, id: MateriaId, materia: &NewMateria)
        -> RepositoryResult<Materia>;

    /// Hard-delete a materia.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no row has this id
    async fn delete_materia(&self, id: MateriaId) -> RepositoryResult<()>;

    /// All materias ordered by id ascending.
    async fn list_materias(&self) -> RepositoryResult<Vec<Materia>>;
}
