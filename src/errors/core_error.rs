use thiserror::Error;

/// Errores de la capa de configuración (carga desde entorno / `.env`).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error de configuración: {0}")]
    Config(String),
}
