//! Aggregate queries backing the statistics report.

use async_trait::async_trait;

use super::error::RepositoryResult;

#[async_trait]
pub trait EstadisticasRepository: Send + Sync {
    /// Total number of stored materias.
    async fn count_materias(&self) -> RepositoryResult<u64>;

    /// Number of materias whose `programa_educativo` equals `programa` exactly.
    async fn count_by_programa(&self, programa: &str) -> RepositoryResult<u64>;

    /// Decoded day lists of every materia, one entry per row.
    ///
    /// Rows whose stored day set cannot be decoded are left out, so they
    /// contribute to no day count.
    async fn fetch_dias_semana(&self) -> RepositoryResult<Vec<Vec<String>>>;
}
