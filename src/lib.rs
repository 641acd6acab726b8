//! imageserver-parameters
//!
//! Contenedor de parámetros de tipado dinámico para los componentes
//! enchufables del servidor de imágenes (providers, processors, caches):
//! - Expone `parameters` con `Parameters` y `ParameterValue`.
//! - Expone `hashing` para la representación canónica y el hash SHA-256 que
//!   se usa como parte de las claves de cache.
//! - Expone `errors` (`ParametersError`, `CoreError`).
//! - Expone `config` para construir un `Parameters` desde el entorno.

pub mod config;
pub mod errors;
pub mod hashing;
pub mod parameters;

pub use errors::{CoreError, ParametersError};
pub use parameters::{ParameterValue, Parameters};
