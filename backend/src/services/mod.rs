//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository traits: they
//! apply validation order, translate repository errors into the materia
//! error taxonomy, and compute the statistics report.

pub mod error;
pub mod estadisticas;
pub mod materias;
pub mod validation;

pub use error::{MateriaError, MateriaResult};
pub use estadisticas::{
    compute_estadisticas, StatisticsCatalog, DIAS_HABILES, PROGRAMAS_EDUCATIVOS,
};
pub use materias::{
    create_materia, delete_materia, get_materia, list_materias, update_materia,
    ERROR_AL_ELIMINAR, MATERIA_ACTUALIZADA, MATERIA_ELIMINADA,
};
