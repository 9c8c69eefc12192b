//! Shared helpers for integration tests: scoped environment variables and
//! materia fixtures.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use escolar_api::api::{HoraDelDia, MateriaInput, NewMateria};

pub const PROGRAMA_ICC: &str = "Ingeniería en Ciencias de la Computación";
pub const PROGRAMA_LCC: &str = "Licenciatura en Ciencias de la Computación";
pub const PROGRAMA_ITI: &str = "Ingeniería en Tecnologías de la Información";

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn hora(value: &str) -> HoraDelDia {
    value.parse().expect("valid time literal")
}

/// A valid write model: Lunes/Miércoles 08:00-09:30.
pub fn new_materia(nrc: &str) -> NewMateria {
    NewMateria {
        nrc: nrc.to_string(),
        nombre_materia: "Algoritmos".to_string(),
        seccion: "A".to_string(),
        dias_semana: vec!["Lunes".to_string(), "Miércoles".to_string()],
        hora_inicio: hora("08:00"),
        hora_fin: hora("09:30"),
        salon: "101".to_string(),
        programa_educativo: PROGRAMA_ICC.to_string(),
        profesor_asignado_id: None,
        creditos: 4,
    }
}

pub fn materia_input(nrc: &str) -> MateriaInput {
    MateriaInput::from(new_materia(nrc))
}

pub fn materia_with(nrc: &str, programa: &str, dias: &[&str]) -> NewMateria {
    NewMateria {
        programa_educativo: programa.to_string(),
        dias_semana: dias.iter().map(|d| d.to_string()).collect(),
        ..new_materia(nrc)
    }
}
