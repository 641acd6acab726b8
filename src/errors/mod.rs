//! Errores del crate: acceso a parámetros y carga de configuración.

pub mod core_error;
pub mod parameters_error;

pub use core_error::CoreError;
pub use parameters_error::ParametersError;
