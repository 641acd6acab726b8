//! `Parameters`: contenedor clave/valor de tipado dinámico usado para
//! configurar providers, processors y caches.
//!
//! - Las claves son únicas y se guardan ordenadas (`BTreeMap`), de modo que la
//!   representación canónica y por tanto `hash()` no dependen del orden de
//!   inserción.
//! - Los accessors tipados devuelven `ParametersError::NotFound` si la clave no
//!   existe y `ParametersError::TypeMismatch` si el valor es de otra variante.
//! - No hay operación de borrado: el bag sólo se modifica con `set`.

pub mod json;
pub mod value;

pub use value::ParameterValue;

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ParametersError;
use crate::hashing::{canonical, hash_str};

/// Bag de parámetros heterogéneos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    entries: BTreeMap<String, ParameterValue>,
}

impl Parameters {
    /// Crea un bag vacío.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o sobreescribe el valor en `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Variante encadenable de `set`, útil para construir bags literales.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Itera las entradas en orden lexicográfico de clave.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParameterValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Devuelve el valor crudo almacenado en `key`.
    pub fn get(&self, key: &str) -> Result<&ParameterValue, ParametersError> {
        self.entries.get(key).ok_or_else(|| ParametersError::not_found(key))
    }

    pub fn get_string(&self, key: &str) -> Result<&str, ParametersError> {
        match self.get(key)? {
            ParameterValue::String(s) => Ok(s),
            other => Err(ParametersError::type_mismatch(key, "string", other.type_name())),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i64, ParametersError> {
        match self.get(key)? {
            ParameterValue::Int(i) => Ok(*i),
            other => Err(ParametersError::type_mismatch(key, "int", other.type_name())),
        }
    }

    pub fn get_float(&self, key: &str) -> Result<f64, ParametersError> {
        match self.get(key)? {
            ParameterValue::Float(f) => Ok(*f),
            other => Err(ParametersError::type_mismatch(key, "float", other.type_name())),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, ParametersError> {
        match self.get(key)? {
            ParameterValue::Bool(b) => Ok(*b),
            other => Err(ParametersError::type_mismatch(key, "bool", other.type_name())),
        }
    }

    pub fn get_list(&self, key: &str) -> Result<&[ParameterValue], ParametersError> {
        match self.get(key)? {
            ParameterValue::List(items) => Ok(items),
            other => Err(ParametersError::type_mismatch(key, "list", other.type_name())),
        }
    }

    /// Devuelve el bag anidado en `key`.
    pub fn get_parameters(&self, key: &str) -> Result<&Parameters, ParametersError> {
        match self.get(key)? {
            ParameterValue::Parameters(p) => Ok(p),
            other => Err(ParametersError::type_mismatch(key, "parameters", other.type_name())),
        }
    }

    /// Huella SHA-256 (64 caracteres hex en minúscula) de la representación
    /// canónica del bag. Estable entre procesos para el mismo contenido.
    pub fn hash(&self) -> String {
        let canonical = canonical::render_parameters(self);
        let digest = hash_str(&canonical);
        log::debug!("parameters hash computed: entries={} hash={}", self.len(), digest);
        digest
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical::render_parameters(self))
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a ParameterValue);
    type IntoIter = btree_map::Iter<'a, String, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
