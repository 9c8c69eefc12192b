use chrono::{DateTime, NaiveTime, Utc};
use diesel::prelude::*;

use super::schema::materias;
use crate::api::{Materia, MateriaId, NewMateria, ProfesorId};
use crate::models::dias_semana::{decode_dias_or_empty, encode_dias};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = materias)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // Timestamps are maintained by the database only
pub struct MateriaRow {
    pub id: i64,
    pub nrc: String,
    pub nombre_materia: String,
    pub seccion: String,
    pub dias_semana: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub salon: String,
    pub programa_educativo: String,
    pub profesor_asignado_id: Option<i64>,
    pub creditos: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MateriaRow {
    pub fn into_materia(self) -> Materia {
        Materia {
            id: MateriaId(self.id),
            dias_semana: decode_dias_or_empty(&self.dias_semana, self.id),
            nrc: self.nrc,
            nombre_materia: self.nombre_materia,
            seccion: self.seccion,
            hora_inicio: self.hora_inicio.into(),
            hora_fin: self.hora_fin.into(),
            salon: self.salon,
            programa_educativo: self.programa_educativo,
            profesor_asignado_id: self.profesor_asignado_id.map(ProfesorId),
            creditos: self.creditos,
        }
    }
}

/// Column values for both inserts and full overwrites.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = materias)]
#[diesel(treat_none_as_null = true)]
pub struct MateriaChanges {
    pub nrc: String,
    pub nombre_materia: String,
    pub seccion: String,
    pub dias_semana: String,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub salon: String,
    pub programa_educativo: String,
    pub profesor_asignado_id: Option<i64>,
    pub creditos: i32,
}

impl From<&NewMateria> for MateriaChanges {
    fn from(materia: &NewMateria) -> Self {
        Self {
            nrc: materia.nrc.clone(),
            nombre_materia: materia.nombre_materia.clone(),
            seccion: materia.seccion.clone(),
            dias_semana: encode_dias(&materia.dias_semana),
            hora_inicio: materia.hora_inicio.into(),
            hora_fin: materia.hora_fin.into(),
            salon: materia.salon.clone(),
            programa_educativo: materia.programa_educativo.clone(),
            profesor_asignado_id: materia.profesor_asignado_id.map(i64::from),
            creditos: materia.creditos,
        }
    }
}
