use thiserror::Error;

/// Errores de acceso a un `Parameters`.
///
/// Ambos casos de lookup son recuperables: `NotFound` suele tratarse como
/// "usar valor por defecto" y `TypeMismatch` como error de configuración.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParametersError {
    #[error("value not found: {key}")]
    NotFound { key: String },
    #[error("type mismatch for '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid json parameters: {0}")]
    InvalidJson(String),
}

impl ParametersError {
    pub fn not_found(key: &str) -> Self {
        Self::NotFound { key: key.to_string() }
    }

    pub fn type_mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { key: key.to_string(), expected, found }
    }

    /// `true` si la clave no existe en el bag.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
