pub mod dias_semana;
pub mod hora;
pub mod macros;
pub mod materia;

pub use hora::*;
pub use materia::*;
