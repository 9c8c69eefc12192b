//! Integration tests for the in-memory repository through the public traits.

mod support;

use std::sync::Arc;

use escolar_api::api::{MateriaId, ProfesorId};
use escolar_api::db::repositories::LocalRepository;
use escolar_api::db::{EstadisticasRepository, FullRepository, MateriaRepository};
use escolar_api::services::{compute_estadisticas, StatisticsCatalog};
use support::{materia_with, new_materia, PROGRAMA_ICC, PROGRAMA_LCC};

#[tokio::test]
async fn test_round_trip_preserves_fields_and_day_order() {
    let repo = LocalRepository::new();
    let mut materia = new_materia("20001");
    materia.dias_semana = vec!["Viernes".to_string(), "Lunes".to_string()];
    materia.profesor_asignado_id = Some(ProfesorId(12));

    let id = repo.insert_materia(&materia).await.unwrap();
    let stored = repo.get_materia(id).await.unwrap();

    assert_eq!(stored.dias_semana, vec!["Viernes", "Lunes"]);
    assert_eq!(stored.profesor_asignado_id, Some(ProfesorId(12)));
    assert_eq!(stored, materia.with_id(id));
}

#[tokio::test]
async fn test_nrc_exists() {
    let repo = LocalRepository::new();
    assert!(!repo.nrc_exists("1").await.unwrap());
    repo.insert_materia(&new_materia("1")).await.unwrap();
    assert!(repo.nrc_exists("1").await.unwrap());
    assert!(!repo.nrc_exists("2").await.unwrap());
}

#[tokio::test]
async fn test_update_is_full_overwrite() {
    let repo = LocalRepository::new();
    let mut original = new_materia("30");
    original.profesor_asignado_id = Some(ProfesorId(1));
    let id = repo.insert_materia(&original).await.unwrap();

    let replacement = materia_with("31", PROGRAMA_LCC, &["Jueves"]);
    let updated = repo.update_materia(id, &replacement).await.unwrap();

    assert_eq!(updated, replacement.clone().with_id(id));
    assert_eq!(repo.get_materia(id).await.unwrap().profesor_asignado_id, None);
    assert!(!repo.nrc_exists("30").await.unwrap());
}

#[tokio::test]
async fn test_list_skips_nothing_and_tolerates_corrupt_days() {
    let repo = LocalRepository::new();
    repo.insert_materia(&new_materia("1")).await.unwrap();
    let corrupt = repo.insert_raw(&new_materia("2"), "Lunes y Martes");

    let materias = repo.list_materias().await.unwrap();
    assert_eq!(materias.len(), 2);
    let corrupt_row = materias.iter().find(|m| m.id == corrupt).unwrap();
    assert!(corrupt_row.dias_semana.is_empty());

    assert_eq!(repo.fetch_dias_semana().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_mixed_day_list_keeps_its_string_days() {
    let repo = LocalRepository::new();
    let id = repo.insert_raw(&new_materia("1"), "[\"Lunes\", 3]");

    assert_eq!(repo.get_materia(id).await.unwrap().dias_semana, vec!["Lunes"]);
    assert_eq!(
        repo.fetch_dias_semana().await.unwrap(),
        vec![vec!["Lunes".to_string()]]
    );

    let report = compute_estadisticas(&repo, &StatisticsCatalog::default())
        .await
        .unwrap();
    assert_eq!(report.por_dia.get("Lunes"), Some(1));
}

#[tokio::test]
async fn test_usable_as_trait_object() {
    let repo: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    repo.insert_materia(&materia_with("1", PROGRAMA_ICC, &["Lunes"]))
        .await
        .unwrap();

    assert_eq!(repo.count_materias().await.unwrap(), 1);
    assert_eq!(repo.count_by_programa(PROGRAMA_ICC).await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_inserts_with_same_nrc_admit_one() {
    let repo = Arc::new(LocalRepository::new());
    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.insert_materia(&new_materia("RACE")).await
        }));
    }

    let mut ok = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(e) if e.is_conflict() => conflicts += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(repo.materia_count(), 1);
}

#[tokio::test]
async fn test_get_unknown_id() {
    let repo = LocalRepository::new();
    let err = repo.get_materia(MateriaId(404)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.context().entity_id.as_deref(), Some("404"));
}
