//! Aggregate statistics over all materias.

use log::debug;

use crate::api::{ConteoPorClave, MateriaEstadisticas};
use crate::db::repository::EstadisticasRepository;

use super::error::MateriaResult;

/// Educational programs reported in the per-program breakdown.
pub const PROGRAMAS_EDUCATIVOS: [&str; 3] = [
    "Ingeniería en Ciencias de la Computación",
    "Licenciatura en Ciencias de la Computación",
    "Ingeniería en Tecnologías de la Información",
];

/// Weekdays reported in the per-day breakdown.
pub const DIAS_HABILES: [&str; 5] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"];

/// Keys of the statistics breakdowns, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsCatalog {
    pub programas: Vec<String>,
    pub dias: Vec<String>,
}

impl Default for StatisticsCatalog {
    fn default() -> Self {
        Self {
            programas: PROGRAMAS_EDUCATIVOS.iter().map(|s| s.to_string()).collect(),
            dias: DIAS_HABILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StatisticsCatalog {
    /// Built-in lists, overridden by `ESTADISTICAS_PROGRAMAS` and
    /// `ESTADISTICAS_DIAS` (`;`-separated) when set and non-empty.
    pub fn from_env() -> Self {
        let mut catalog = Self::default();
        if let Some(programas) = std::env::var("ESTADISTICAS_PROGRAMAS")
            .ok()
            .and_then(|raw| parse_list(&raw))
        {
            catalog.programas = programas;
        }
        if let Some(dias) = std::env::var("ESTADISTICAS_DIAS")
            .ok()
            .and_then(|raw| parse_list(&raw))
        {
            catalog.dias = dias;
        }
        catalog
    }
}

fn parse_list(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// Compute totals, the per-program breakdown and the per-day breakdown.
///
/// A day listed twice in one materia counts once for that materia.
pub async fn compute_estadisticas<R: EstadisticasRepository + ?Sized>(
    repo: &R,
    catalog: &StatisticsCatalog,
) -> MateriaResult<MateriaEstadisticas> {
    let total_materias = repo.count_materias().await?;

    let mut por_programa = ConteoPorClave::new();
    for programa in &catalog.programas {
        por_programa.push(programa.clone(), repo.count_by_programa(programa).await?);
    }

    let dias_por_materia = repo.fetch_dias_semana().await?;
    let mut por_dia = ConteoPorClave::new();
    for dia in &catalog.dias {
        let conteo = dias_por_materia
            .iter()
            .filter(|dias| dias.iter().any(|d| d == dia))
            .count() as u64;
        por_dia.push(dia.clone(), conteo);
    }

    debug!(
        "Statistics over {} materias ({} with readable days)",
        total_materias,
        dias_por_materia.len()
    );

    Ok(MateriaEstadisticas {
        total_materias,
        por_programa,
        por_dia,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HoraDelDia, NewMateria};
    use crate::db::{LocalRepository, MateriaRepository};

    fn materia(nrc: &str, programa: &str, dias: &[&str]) -> NewMateria {
        NewMateria {
            nrc: nrc.to_string(),
            nombre_materia: "Materia".to_string(),
            seccion: "A".to_string(),
            dias_semana: dias.iter().map(|d| d.to_string()).collect(),
            hora_inicio: HoraDelDia::from_hm(7, 0).unwrap(),
            hora_fin: HoraDelDia::from_hm(8, 0).unwrap(),
            salon: "1".to_string(),
            programa_educativo: programa.to_string(),
            profesor_asignado_id: None,
            creditos: 3,
        }
    }

    #[test]
    fn test_parse_list_trims_and_skips_blanks() {
        assert_eq!(
            parse_list(" Lunes ; ;Sábado"),
            Some(vec!["Lunes".to_string(), "Sábado".to_string()])
        );
        assert_eq!(parse_list(" ; "), None);
    }

    #[tokio::test]
    async fn test_empty_repository_reports_zeroes_in_catalog_order() {
        let repo = LocalRepository::new();
        let stats = compute_estadisticas(&repo, &StatisticsCatalog::default())
            .await
            .unwrap();

        assert_eq!(stats.total_materias, 0);
        let programas: Vec<&str> = stats.por_programa.iter().map(|(k, _)| k).collect();
        assert_eq!(programas, PROGRAMAS_EDUCATIVOS.to_vec());
        assert!(stats.por_dia.iter().all(|(_, c)| c == 0));
        assert_eq!(stats.por_dia.len(), 5);
    }

    #[tokio::test]
    async fn test_counts_programs_and_days() {
        let repo = LocalRepository::new();
        repo.insert_materia(&materia("1", PROGRAMAS_EDUCATIVOS[0], &["Lunes", "Miércoles"]))
            .await
            .unwrap();
        repo.insert_materia(&materia("2", PROGRAMAS_EDUCATIVOS[0], &["Lunes", "Lunes"]))
            .await
            .unwrap();
        repo.insert_materia(&materia("3", "Doctorado en Física", &["Sábado", "Viernes"]))
            .await
            .unwrap();
        repo.insert_raw(&materia("4", PROGRAMAS_EDUCATIVOS[2], &[]), "{not json");

        let stats = compute_estadisticas(&repo, &StatisticsCatalog::default())
            .await
            .unwrap();

        assert_eq!(stats.total_materias, 4);
        assert_eq!(stats.por_programa.get(PROGRAMAS_EDUCATIVOS[0]), Some(2));
        assert_eq!(stats.por_programa.get(PROGRAMAS_EDUCATIVOS[1]), Some(0));
        assert_eq!(stats.por_programa.get(PROGRAMAS_EDUCATIVOS[2]), Some(1));
        assert_eq!(stats.por_programa.get("Doctorado en Física"), None);

        assert_eq!(stats.por_dia.get("Lunes"), Some(2));
        assert_eq!(stats.por_dia.get("Miércoles"), Some(1));
        assert_eq!(stats.por_dia.get("Viernes"), Some(1));
        assert_eq!(stats.por_dia.get("Sábado"), None);
        assert!(stats.por_dia.iter().all(|(_, c)| c <= stats.total_materias));
    }

    #[tokio::test]
    async fn test_custom_catalog() {
        let repo = LocalRepository::new();
        repo.insert_materia(&materia("1", "Maestría", &["Sábado"]))
            .await
            .unwrap();

        let catalog = StatisticsCatalog {
            programas: vec!["Maestría".to_string()],
            dias: vec!["Sábado".to_string()],
        };
        let stats = compute_estadisticas(&repo, &catalog).await.unwrap();
        assert_eq!(stats.por_programa.get("Maestría"), Some(1));
        assert_eq!(stats.por_dia.get("Sábado"), Some(1));
    }
}
