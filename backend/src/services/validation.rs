//! Field validation for create and update payloads.
//!
//! Checks run in a fixed order and stop at the first failure:
//! duplicate nrc (see [`crate::services::materias`]), time ordering,
//! non-empty day set, then the remaining required fields.

use crate::api::{HoraDelDia, MateriaInput, NewMateria};

use super::error::{MateriaError, MateriaResult};

pub const NRC_DUPLICADO: &str = "El NRC ya existe en la base de datos";
pub const HORARIO_INVALIDO: &str = "La hora de inicio debe ser menor que la hora de finalización";
pub const HORARIO_INCOMPLETO: &str = "Debe indicar la hora de inicio y la hora de finalización";
pub const DIAS_VACIOS: &str = "Debe seleccionar al menos un día";
pub const MATERIA_NO_ENCONTRADA: &str = "Materia no encontrada";

fn campo_obligatorio(campo: &str) -> MateriaError {
    MateriaError::Validation(format!("El campo '{}' es obligatorio", campo))
}

fn texto_requerido(valor: &Option<String>, campo: &str) -> MateriaResult<String> {
    match valor {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(campo_obligatorio(campo)),
    }
}

/// Start must be strictly before end; equal times are rejected.
pub fn validar_horario(
    inicio: Option<HoraDelDia>,
    fin: Option<HoraDelDia>,
) -> MateriaResult<(HoraDelDia, HoraDelDia)> {
    match (inicio, fin) {
        (Some(inicio), Some(fin)) if inicio < fin => Ok((inicio, fin)),
        (Some(_), Some(_)) => Err(MateriaError::Validation(HORARIO_INVALIDO.to_string())),
        _ => Err(MateriaError::Validation(HORARIO_INCOMPLETO.to_string())),
    }
}

pub fn validar_dias(dias: &Option<Vec<String>>) -> MateriaResult<Vec<String>> {
    match dias {
        Some(dias) if !dias.is_empty() => Ok(dias.clone()),
        _ => Err(MateriaError::Validation(DIAS_VACIOS.to_string())),
    }
}

/// Run every field check except nrc uniqueness and build the write model.
pub fn validar_campos(input: &MateriaInput) -> MateriaResult<NewMateria> {
    let (hora_inicio, hora_fin) = validar_horario(input.hora_inicio, input.hora_fin)?;
    let dias_semana = validar_dias(&input.dias_semana)?;

    Ok(NewMateria {
        nrc: texto_requerido(&input.nrc, "nrc")?,
        nombre_materia: texto_requerido(&input.nombre_materia, "nombre_materia")?,
        seccion: texto_requerido(&input.seccion, "seccion")?,
        dias_semana,
        hora_inicio,
        hora_fin,
        salon: texto_requerido(&input.salon, "salon")?,
        programa_educativo: texto_requerido(&input.programa_educativo, "programa_educativo")?,
        profesor_asignado_id: input.profesor_asignado_id,
        creditos: input.creditos.ok_or_else(|| campo_obligatorio("creditos"))?,
    })
}
