//! Materia (course section) domain types.

use serde::{Deserialize, Serialize};

use super::hora::HoraDelDia;
use crate::define_id_type;

define_id_type!(i64, MateriaId);
define_id_type!(i64, ProfesorId);

/// A stored materia as returned to clients.
///
/// `dias_semana` is always a decoded list here; the text encoding only
/// exists inside the repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Materia {
    pub id: MateriaId,
    pub nrc: String,
    pub nombre_materia: String,
    pub seccion: String,
    pub dias_semana: Vec<String>,
    pub hora_inicio: HoraDelDia,
    pub hora_fin: HoraDelDia,
    pub salon: String,
    pub programa_educativo: String,
    pub profesor_asignado_id: Option<ProfesorId>,
    pub creditos: i32,
}

/// Validated field set for an insert or a full overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMateria {
    pub nrc: String,
    pub nombre_materia: String,
    pub seccion: String,
    pub dias_semana: Vec<String>,
    pub hora_inicio: HoraDelDia,
    pub hora_fin: HoraDelDia,
    pub salon: String,
    pub programa_educativo: String,
    pub profesor_asignado_id: Option<ProfesorId>,
    pub creditos: i32,
}

impl NewMateria {
    /// Attach a primary key, producing the stored representation.
    pub fn with_id(self, id: MateriaId) -> Materia {
        Materia {
            id,
            nrc: self.nrc,
            nombre_materia: self.nombre_materia,
            seccion: self.seccion,
            dias_semana: self.dias_semana,
            hora_inicio: self.hora_inicio,
            hora_fin: self.hora_fin,
            salon: self.salon,
            programa_educativo: self.programa_educativo,
            profesor_asignado_id: self.profesor_asignado_id,
            creditos: self.creditos,
        }
    }
}
