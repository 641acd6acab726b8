//! Carga de parámetros desde variables de entorno (.env incluido).
//!
//! Convención: `IMAGESERVER_CACHE__TTL=60` produce `{cache: {ttl: 60}}`. El
//! prefijo y el separador de niveles se leen una sola vez en `CONFIG`.
//! Los valores se interpretan como bool, entero, flotante o string, en ese
//! orden.

use once_cell::sync::Lazy;
use std::env;

use crate::errors::CoreError;
use crate::parameters::{ParameterValue, Parameters};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración del loader de entorno.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Prefijo que deben tener las variables a cargar.
    pub prefix: String,
    /// Separador entre niveles de anidamiento.
    pub separator: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { prefix: "IMAGESERVER_".to_string(), separator: "__".to_string() }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let defaults = Self::default();
        let prefix = env::var("PARAMETERS_ENV_PREFIX").unwrap_or(defaults.prefix);
        let separator = env::var("PARAMETERS_ENV_SEPARATOR").ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.separator);
        Self { prefix, separator }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<LoaderConfig> = Lazy::new(LoaderConfig::from_env);

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Construye un `Parameters` con las variables de entorno del proceso que
/// llevan el prefijo de `CONFIG`.
///
/// Las variables sin el prefijo se ignoran aunque no sean UTF-8.
///
/// # Errores
/// `CoreError::Config` si una variable con el prefijo no es UTF-8 (nombre o
/// valor), además de los errores de `parameters_from_vars`.
pub fn parameters_from_env() -> Result<Parameters, CoreError> {
    init_dotenv();
    let prefix = CONFIG.prefix.as_bytes();
    let mut vars = Vec::new();
    for (name, value) in env::vars_os() {
        if !name.as_encoded_bytes().starts_with(prefix) {
            continue;
        }
        let name = name
            .into_string()
            .map_err(|n| CoreError::Config(format!("environment variable name {n:?} is not valid UTF-8")))?;
        let value = value
            .into_string()
            .map_err(|_| CoreError::Config(format!("value of '{name}' is not valid UTF-8")))?;
        vars.push((name, value));
    }
    parameters_from_vars(&CONFIG, vars)
}

/// Núcleo puro del loader: recibe los pares `(nombre, valor)` explícitamente.
///
/// # Errores
/// `CoreError::Config` si una clave se usa a la vez como valor escalar y como
/// prefijo de un bag anidado.
pub fn parameters_from_vars<I>(config: &LoaderConfig, vars: I) -> Result<Parameters, CoreError>
where
    I: IntoIterator<Item = (String, String)>,
{
    // Orden estable para que los conflictos se detecten igual en cada ejecución.
    let mut selected: Vec<(String, String)> = vars
        .into_iter()
        .filter(|(name, _)| name.starts_with(&config.prefix))
        .collect();
    selected.sort();

    let mut params = Parameters::new();
    for (name, raw) in selected {
        let path: Vec<String> = name[config.prefix.len()..]
            .split(config.separator.as_str())
            .map(str::to_lowercase)
            .collect();
        if path.iter().any(String::is_empty) {
            log::warn!("skipping environment variable with empty key segment: {name}");
            continue;
        }
        insert_path(&mut params, &path, parse_scalar(&raw), &name)?;
    }
    log::debug!("parameters loaded from environment: prefix={} entries={}", config.prefix, params.len());
    Ok(params)
}

fn insert_path(params: &mut Parameters, path: &[String], value: ParameterValue, name: &str) -> Result<(), CoreError> {
    match path {
        [] => Ok(()),
        [leaf] => {
            if params.has(leaf) {
                return Err(CoreError::Config(format!("'{name}' conflicts with an existing key '{leaf}'")));
            }
            params.set(leaf.clone(), value);
            Ok(())
        }
        [head, rest @ ..] => {
            let mut child = match params.get(head) {
                Ok(ParameterValue::Parameters(p)) => p.clone(),
                Ok(other) => {
                    return Err(CoreError::Config(format!(
                        "'{name}' nests under '{head}', which already holds a {}",
                        other.type_name()
                    )))
                }
                Err(_) => Parameters::new(),
            };
            insert_path(&mut child, rest, value, name)?;
            params.set(head.clone(), child);
            Ok(())
        }
    }
}

fn parse_scalar(raw: &str) -> ParameterValue {
    match raw {
        "true" => return ParameterValue::Bool(true),
        "false" => return ParameterValue::Bool(false),
        _ => {}
    }
    if let Ok(i) = raw.parse::<i64>() {
        return ParameterValue::Int(i);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => ParameterValue::Float(f),
        _ => ParameterValue::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn loads_prefixed_vars_with_nesting() {
        let cfg = LoaderConfig::default();
        let p = parameters_from_vars(&cfg, vars(&[
            ("IMAGESERVER_FORMAT", "png"),
            ("IMAGESERVER_CACHE__TTL", "60"),
            ("IMAGESERVER_CACHE__ENABLED", "true"),
            ("IMAGESERVER_QUALITY", "0.5"),
            ("PATH", "/usr/bin"),
        ])).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.get_string("format").unwrap(), "png");
        assert_eq!(p.get_float("quality").unwrap(), 0.5);
        let cache = p.get_parameters("cache").unwrap();
        assert_eq!(cache.get_int("ttl").unwrap(), 60);
        assert!(cache.get_bool("enabled").unwrap());
        assert!(!p.has("path"));
    }

    #[test]
    fn scalar_and_nested_conflict_is_config_error() {
        let cfg = LoaderConfig::default();
        let err = parameters_from_vars(&cfg, vars(&[
            ("IMAGESERVER_CACHE", "on"),
            ("IMAGESERVER_CACHE__TTL", "60"),
        ])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn empty_segments_are_skipped() {
        let cfg = LoaderConfig::default();
        let p = parameters_from_vars(&cfg, vars(&[
            ("IMAGESERVER_", "x"),
            ("IMAGESERVER_A____B", "1"),
            ("IMAGESERVER_OK", "1"),
        ])).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.get_int("ok").unwrap(), 1);
    }

    #[test]
    fn parse_scalar_order() {
        assert_eq!(parse_scalar("true"), ParameterValue::Bool(true));
        assert_eq!(parse_scalar("42"), ParameterValue::Int(42));
        assert_eq!(parse_scalar("4.5"), ParameterValue::Float(4.5));
        assert_eq!(parse_scalar("NaN"), ParameterValue::String("NaN".into()));
        assert_eq!(parse_scalar("TRUE"), ParameterValue::String("TRUE".into()));
    }

    #[test]
    fn custom_prefix_and_separator() {
        let cfg = LoaderConfig { prefix: "P_".into(), separator: ".".into() };
        let p = parameters_from_vars(&cfg, vars(&[("P_a.b", "x")])).unwrap();
        assert_eq!(p.get_parameters("a").unwrap().get_string("b").unwrap(), "x");
    }
}
