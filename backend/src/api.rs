//! Public API surface for the backend.
//!
//! Consolidates the types exchanged with clients: the materia domain types,
//! request payloads, and the statistics report. All types derive
//! Serialize/Deserialize for JSON transport.

pub use crate::models::{HoraDelDia, Materia, MateriaId, NewMateria, ProfesorId};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Client-submitted materia fields.
///
/// Every field is optional at the transport level so that missing values
/// surface as validation messages instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MateriaInput {
    pub nrc: Option<String>,
    pub nombre_materia: Option<String>,
    pub seccion: Option<String>,
    pub dias_semana: Option<Vec<String>>,
    pub hora_inicio: Option<HoraDelDia>,
    pub hora_fin: Option<HoraDelDia>,
    pub salon: Option<String>,
    pub programa_educativo: Option<String>,
    pub profesor_asignado_id: Option<ProfesorId>,
    pub creditos: Option<i32>,
}

impl From<NewMateria> for MateriaInput {
    fn from(m: NewMateria) -> Self {
        Self {
            nrc: Some(m.nrc),
            nombre_materia: Some(m.nombre_materia),
            seccion: Some(m.seccion),
            dias_semana: Some(m.dias_semana),
            hora_inicio: Some(m.hora_inicio),
            hora_fin: Some(m.hora_fin),
            salon: Some(m.salon),
            programa_educativo: Some(m.programa_educativo),
            profesor_asignado_id: m.profesor_asignado_id,
            creditos: Some(m.creditos),
        }
    }
}

/// Update payload: the target id travels in the body next to the full field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualizarMateriaInput {
    pub id: Option<MateriaId>,
    #[serde(flatten)]
    pub campos: MateriaInput,
}

/// Ordered `name -> count` pairs, serialized as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConteoPorClave(Vec<(String, u64)>);

impl ConteoPorClave {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, clave: impl Into<String>, conteo: u64) {
        self.0.push((clave.into(), conteo));
    }

    /// Count for a key, `None` if the key is not part of the breakdown.
    pub fn get(&self, clave: &str) -> Option<u64> {
        self.0
            .iter()
            .find(|(k, _)| k == clave)
            .map(|(_, conteo)| *conteo)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ConteoPorClave {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (clave, conteo) in &self.0 {
            map.serialize_entry(clave, conteo)?;
        }
        map.end()
    }
}

/// Aggregate statistics over all materias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MateriaEstadisticas {
    pub total_materias: u64,
    pub por_programa: ConteoPorClave,
    pub por_dia: ConteoPorClave,
}
