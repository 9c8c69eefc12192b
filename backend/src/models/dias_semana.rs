//! Storage codec for the weekday set of a materia.
//!
//! The day list is persisted as JSON text (`["Lunes","Miércoles"]`). Rows
//! written by other tools may hold anything in that column, so decoding is
//! tolerant: callers choose between the strict [`decode_dias`] and the
//! fallback [`decode_dias_or_empty`].

use log::warn;

/// Error raised when stored text is not a JSON array.
#[derive(Debug, thiserror::Error)]
pub enum DiasSemanaError {
    #[error("dias_semana is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dias_semana is not a list")]
    NotAList,
}

/// Encode a day list for storage. Order is kept as given.
pub fn encode_dias(dias: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(dias).unwrap_or_else(|_| "[]".to_string())
}

/// Decode stored text into a day list.
///
/// Any JSON array is accepted. Elements that are not strings can never name
/// a day, so they are dropped instead of failing the whole row.
pub fn decode_dias(raw: &str) -> Result<Vec<String>, DiasSemanaError> {
    match serde_json::from_str::<serde_json::Value>(raw)? {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Err(DiasSemanaError::NotAList),
    }
}

/// Decode stored text, yielding an empty list for unreadable data.
pub fn decode_dias_or_empty(raw: &str, materia_id: i64) -> Vec<String> {
    match decode_dias(raw) {
        Ok(dias) => dias,
        Err(e) => {
            warn!(
                "materia {}: unreadable dias_semana {:?} ({}), returning empty list",
                materia_id, raw, e
            );
            Vec::new()
        }
    }
}
