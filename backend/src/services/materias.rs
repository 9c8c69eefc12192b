//! CRUD orchestration for materias.
//!
//! Each operation takes the repository explicitly so any backend can be
//! injected. The nrc pre-check is advisory; a conflict raised by the backend
//! at write time is reported with the same duplicate-NRC message.

use log::{debug, error, info};

use crate::api::{ActualizarMateriaInput, Materia, MateriaId, MateriaInput};
use crate::db::repository::{MateriaRepository, RepositoryError};

use super::error::{MateriaError, MateriaResult};
use super::validation::{validar_campos, MATERIA_NO_ENCONTRADA, NRC_DUPLICADO};

pub const MATERIA_ACTUALIZADA: &str = "Materia actualizada correctamente";
pub const MATERIA_ELIMINADA: &str = "Materia eliminada";
pub const ERROR_AL_ELIMINAR: &str = "Algo pasó al eliminar";

fn no_encontrada() -> MateriaError {
    MateriaError::NotFound(MATERIA_NO_ENCONTRADA.to_string())
}

fn nrc_duplicado() -> MateriaError {
    MateriaError::Validation(NRC_DUPLICADO.to_string())
}

/// Translate backend errors that have a user-facing meaning.
fn map_write_error(err: RepositoryError) -> MateriaError {
    if err.is_conflict() {
        nrc_duplicado()
    } else if err.is_not_found() {
        no_encontrada()
    } else {
        MateriaError::Repository(err)
    }
}

async fn ensure_nrc_libre<R: MateriaRepository + ?Sized>(
    repo: &R,
    nrc: Option<&str>,
) -> MateriaResult<()> {
    if let Some(nrc) = nrc {
        if repo.nrc_exists(nrc).await? {
            debug!("Rejecting duplicate nrc {}", nrc);
            return Err(nrc_duplicado());
        }
    }
    Ok(())
}

/// All materias, id ascending.
pub async fn list_materias<R: MateriaRepository + ?Sized>(
    repo: &R,
) -> MateriaResult<Vec<Materia>> {
    Ok(repo.list_materias().await?)
}

/// Fetch one materia. A missing id is reported as not found.
pub async fn get_materia<R: MateriaRepository + ?Sized>(
    repo: &R,
    id: Option<MateriaId>,
) -> MateriaResult<Materia> {
    let id = id.ok_or_else(no_encontrada)?;
    repo.get_materia(id).await.map_err(map_write_error)
}

/// Validate and store a new materia, returning its id.
pub async fn create_materia<R: MateriaRepository + ?Sized>(
    repo: &R,
    input: &MateriaInput,
) -> MateriaResult<MateriaId> {
    ensure_nrc_libre(repo, input.nrc.as_deref()).await?;
    let materia = validar_campos(input)?;

    let id = repo
        .insert_materia(&materia)
        .await
        .map_err(map_write_error)?;
    info!("Created materia {} (nrc {})", id, materia.nrc);
    Ok(id)
}

/// Overwrite every field of an existing materia.
///
/// The nrc uniqueness check only runs when the nrc changes, so a materia
/// never collides with itself.
pub async fn update_materia<R: MateriaRepository + ?Sized>(
    repo: &R,
    input: &ActualizarMateriaInput,
) -> MateriaResult<Materia> {
    let id = input.id.ok_or_else(no_encontrada)?;
    let actual = repo.get_materia(id).await.map_err(map_write_error)?;

    let nuevo_nrc = input.campos.nrc.as_deref();
    if nuevo_nrc.is_some_and(|nrc| nrc != actual.nrc) {
        ensure_nrc_libre(repo, nuevo_nrc).await?;
    }
    let materia = validar_campos(&input.campos)?;

    let updated = repo
        .update_materia(id, &materia)
        .await
        .map_err(map_write_error)?;
    info!("Updated materia {}", id);
    Ok(updated)
}

/// Hard-delete a materia.
///
/// Failures of the delete itself are logged and reported with a generic
/// message instead of the backend error.
pub async fn delete_materia<R: MateriaRepository + ?Sized>(
    repo: &R,
    id: Option<MateriaId>,
) -> MateriaResult<()> {
    let id = id.ok_or_else(no_encontrada)?;
    repo.get_materia(id).await.map_err(map_write_error)?;

    match repo.delete_materia(id).await {
        Ok(()) => {
            info!("Deleted materia {}", id);
            Ok(())
        }
        Err(e) if e.is_not_found() => Err(no_encontrada()),
        Err(e) => {
            error!("Failed to delete materia {}: {}", id, e);
            Err(MateriaError::Unexpected(ERROR_AL_ELIMINAR.to_string()))
        }
    }
}
