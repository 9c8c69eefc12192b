//! In-memory local repository implementation.
//!
//! Stores rows the way the `materias` table does (day list as encoded text)
//! so that decode tolerance behaves the same as against Postgres. Every write
//! runs under one write lock, which makes it atomic and lets the nrc check
//! act like a unique index.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{HoraDelDia, Materia, MateriaId, NewMateria, ProfesorId};
use crate::db::repository::*;
use crate::models::dias_semana::{decode_dias, decode_dias_or_empty, encode_dias};

/// A stored row, mirroring the database columns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MateriaRow {
    id: i64,
    nrc: String,
    nombre_materia: String,
    seccion: String,
    dias_semana: String,
    hora_inicio: HoraDelDia,
    hora_fin: HoraDelDia,
    salon: String,
    programa_educativo: String,
    profesor_asignado_id: Option<i64>,
    creditos: i32,
}

impl MateriaRow {
    fn from_new(id: i64, materia: &NewMateria, dias_semana: String) -> Self {
        Self {
            id,
            nrc: materia.nrc.clone(),
            nombre_materia: materia.nombre_materia.clone(),
            seccion: materia.seccion.clone(),
            dias_semana,
            hora_inicio: materia.hora_inicio,
            hora_fin: materia.hora_fin,
            salon: materia.salon.clone(),
            programa_educativo: materia.programa_educativo.clone(),
            profesor_asignado_id: materia.profesor_asignado_id.map(i64::from),
            creditos: materia.creditos,
        }
    }

    fn to_materia(&self) -> Materia {
        Materia {
            id: MateriaId(self.id),
            nrc: self.nrc.clone(),
            nombre_materia: self.nombre_materia.clone(),
            seccion: self.seccion.clone(),
            dias_semana: decode_dias_or_empty(&self.dias_semana, self.id),
            hora_inicio: self.hora_inicio,
            hora_fin: self.hora_fin,
            salon: self.salon.clone(),
            programa_educativo: self.programa_educativo.clone(),
            profesor_asignado_id: self.profesor_asignado_id.map(ProfesorId),
            creditos: self.creditos,
        }
    }
}

struct LocalData {
    rows: BTreeMap<i64, MateriaRow>,
    next_id: i64,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalData {
    fn nrc_taken_by_other(&self, nrc: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.nrc == nrc && Some(row.id) != except)
    }
}

/// In-memory repository for tests and local development.
///
/// # Example
/// ```
/// use escolar_api::db::repositories::LocalRepository;
/// use escolar_api::db::MateriaRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = LocalRepository::new();
///     assert!(repo.list_materias().await.unwrap().is_empty());
/// }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Store a row with an arbitrary `dias_semana` column value.
    ///
    /// Bypasses encoding and the uniqueness check; used to reproduce rows
    /// written by other tools, including unreadable day sets.
    pub fn insert_raw(&self, materia: &NewMateria, dias_semana_raw: &str) -> MateriaId {
        let mut data = self.data.write();
        let id = data.next_id;
        data.next_id += 1;
        data.rows.insert(
            id,
            MateriaRow::from_new(id, materia, dias_semana_raw.to_string()),
        );
        MateriaId(id)
    }

    /// Toggle health to simulate a backend that rejects writes.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Remove all rows and reset id assignment.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    pub fn materia_count(&self) -> usize {
        self.data.read().rows.len()
    }

    pub fn has_materia(&self, id: MateriaId) -> bool {
        self.data.read().rows.contains_key(&id.0)
    }

    /// Writes fail while the repository is marked unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation).with_entity("materia"),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(operation: &str, id: MateriaId) -> RepositoryError {
    RepositoryError::not_found_with_context(
        format!("Materia {} not found", id),
        ErrorContext::new(operation)
            .with_entity("materia")
            .with_entity_id(id),
    )
}

fn nrc_conflict(operation: &str, nrc: &str) -> RepositoryError {
    RepositoryError::conflict_with_context(
        format!("nrc '{}' already exists", nrc),
        ErrorContext::new(operation)
            .with_entity("materia")
            .with_details("unique=nrc"),
    )
}

#[async_trait]
impl MateriaRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn get_materia(&self, id: MateriaId) -> RepositoryResult<Materia> {
        let data = self.data.read();
        data.rows
            .get(&id.0)
            .map(MateriaRow::to_materia)
            .ok_or_else(|| not_found("get_materia", id))
    }

    async fn nrc_exists(&self, nrc: &str) -> RepositoryResult<bool> {
        Ok(self.data.read().nrc_taken_by_other(nrc, None))
    }

    async fn insert_materia(&self, materia: &NewMateria) -> RepositoryResult<MateriaId> {
        self.check_health("insert_materia")?;

        let mut data = self.data.write();
        if data.nrc_taken_by_other(&materia.nrc, None) {
            return Err(nrc_conflict("insert_materia", &materia.nrc));
        }

        let id = data.next_id;
        data.next_id += 1;
        data.rows.insert(
            id,
            MateriaRow::from_new(id, materia, encode_dias(&materia.dias_semana)),
        );
        Ok(MateriaId(id))
    }

    async fn update_materia(
        &self,
        id: MateriaId,
        materia: &NewMateria,
    ) -> RepositoryResult<Materia> {
        self.check_health("update_materia")?;

        let mut data = self.data.write();
        if !data.rows.contains_key(&id.0) {
            return Err(not_found("update_materia", id));
        }
        if data.nrc_taken_by_other(&materia.nrc, Some(id.0)) {
            return Err(nrc_conflict("update_materia", &materia.nrc));
        }

        let row = MateriaRow::from_new(id.0, materia, encode_dias(&materia.dias_semana));
        let updated = row.to_materia();
        data.rows.insert(id.0, row);
        Ok(updated)
    }

    async fn delete_materia(&self, id: MateriaId) -> RepositoryResult<()> {
        self.check_health("delete_materia")?;

        match self.data.write().rows.remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(not_found("delete_materia", id)),
        }
    }

    async fn list_materias(&self) -> RepositoryResult<Vec<Materia>> {
        let data = self.data.read();
        Ok(data.rows.values().map(MateriaRow::to_materia).collect())
    }
}

#[async_trait]
impl EstadisticasRepository for LocalRepository {
    async fn count_materias(&self) -> RepositoryResult<u64> {
        Ok(self.data.read().rows.len() as u64)
    }

    async fn count_by_programa(&self, programa: &str) -> RepositoryResult<u64> {
        let data = self.data.read();
        Ok(data
            .rows
            .values()
            .filter(|row| row.programa_educativo == programa)
            .count() as u64)
    }

    async fn fetch_dias_semana(&self) -> RepositoryResult<Vec<Vec<String>>> {
        let data = self.data.read();
        Ok(data
            .rows
            .values()
            .filter_map(|row| decode_dias(&row.dias_semana).ok())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn materia(nrc: &str) -> NewMateria {
        NewMateria {
            nrc: nrc.to_string(),
            nombre_materia: "Estructuras de Datos".to_string(),
            seccion: "B".to_string(),
            dias_semana: vec!["Martes".to_string(), "Jueves".to_string()],
            hora_inicio: HoraDelDia::from_hm(10, 0).unwrap(),
            hora_fin: HoraDelDia::from_hm(11, 30).unwrap(),
            salon: "CC-204".to_string(),
            programa_educativo: "Licenciatura en Ciencias de la Computación".to_string(),
            profesor_asignado_id: Some(ProfesorId(5)),
            creditos: 6,
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = LocalRepository::new();
        assert!(repo.health_check().await.unwrap());

        repo.set_healthy(false);
        assert!(!repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = LocalRepository::new();
        let id = repo.insert_materia(&materia("10001")).await.unwrap();

        let stored = repo.get_materia(id).await.unwrap();
        assert_eq!(stored, materia("10001").with_id(id));
    }

    #[tokio::test]
    async fn test_ids_are_sequential_and_listed_ascending() {
        let repo = LocalRepository::new();
        let a = repo.insert_materia(&materia("1")).await.unwrap();
        let b = repo.insert_materia(&materia("2")).await.unwrap();
        let c = repo.insert_materia(&materia("3")).await.unwrap();
        assert!(a < b && b < c);

        repo.delete_materia(b).await.unwrap();
        let ids: Vec<MateriaId> = repo
            .list_materias()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_nrc() {
        let repo = LocalRepository::new();
        repo.insert_materia(&materia("777")).await.unwrap();

        let err = repo.insert_materia(&materia("777")).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(repo.materia_count(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_own_nrc_but_rejects_others() {
        let repo = LocalRepository::new();
        let a = repo.insert_materia(&materia("A1")).await.unwrap();
        repo.insert_materia(&materia("B1")).await.unwrap();

        let mut changed = materia("A1");
        changed.salon = "Aula Magna".to_string();
        let updated = repo.update_materia(a, &changed).await.unwrap();
        assert_eq!(updated.salon, "Aula Magna");

        let err = repo.update_materia(a, &materia("B1")).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(repo.get_materia(a).await.unwrap().nrc, "A1");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = LocalRepository::new();
        let missing = MateriaId(99);
        assert!(repo
            .update_materia(missing, &materia("X"))
            .await
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete_materia(missing).await.unwrap_err().is_not_found());
        assert!(repo.get_materia(missing).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_unreadable_dias_decode_to_empty() {
        let repo = LocalRepository::new();
        let id = repo.insert_raw(&materia("RAW"), "Lunes y Martes");

        let stored = repo.get_materia(id).await.unwrap();
        assert!(stored.dias_semana.is_empty());
        assert!(repo.fetch_dias_semana().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_writes_fail_when_unhealthy() {
        let repo = LocalRepository::new();
        let id = repo.insert_materia(&materia("H1")).await.unwrap();
        repo.set_healthy(false);

        let err = repo.delete_materia(id).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(repo.has_materia(id));
        assert!(repo.get_materia(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_clear_resets_ids() {
        let repo = LocalRepository::new();
        repo.insert_materia(&materia("C1")).await.unwrap();
        repo.clear();
        assert_eq!(repo.materia_count(), 0);
        assert_eq!(
            repo.insert_materia(&materia("C1")).await.unwrap(),
            MateriaId(1)
        );
    }

    #[tokio::test]
    async fn test_count_by_programa() {
        let repo = LocalRepository::new();
        repo.insert_materia(&materia("P1")).await.unwrap();
        let mut other = materia("P2");
        other.programa_educativo = "Maestría en Ciencias".to_string();
        repo.insert_materia(&other).await.unwrap();

        assert_eq!(repo.count_materias().await.unwrap(), 2);
        assert_eq!(
            repo.count_by_programa("Licenciatura en Ciencias de la Computación")
                .await
                .unwrap(),
            1
        );
        assert_eq!(repo.count_by_programa("Otro").await.unwrap(), 0);
    }
}
