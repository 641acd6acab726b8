//! Conversión entre `Parameters` y `serde_json::Value`.
//!
//! Permite construir bags a partir de configuración JSON de los componentes.
//! `null` no tiene variante equivalente y se rechaza.

use serde_json::{Map, Value};

use super::{ParameterValue, Parameters};
use crate::errors::ParametersError;

impl Parameters {
    /// Construye un bag a partir de un objeto JSON.
    ///
    /// # Errores
    /// `ParametersError::InvalidJson` si la raíz no es un objeto o si algún
    /// valor (a cualquier profundidad) es `null`.
    pub fn from_json(value: &Value) -> Result<Self, ParametersError> {
        match value {
            Value::Object(map) => object_to_parameters(map, ""),
            other => Err(ParametersError::InvalidJson(format!("expected object at root, found {}", json_kind(other)))),
        }
    }

    /// Convierte el bag a un objeto JSON. Los flotantes no finitos quedan
    /// como `null` porque JSON no los representa.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect();
        Value::Object(map)
    }
}

impl TryFrom<&Value> for Parameters {
    type Error = ParametersError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Parameters::from_json(value)
    }
}

fn object_to_parameters(map: &Map<String, Value>, path: &str) -> Result<Parameters, ParametersError> {
    let mut params = Parameters::new();
    for (k, v) in map {
        let child_path = if path.is_empty() { k.clone() } else { format!("{path}.{k}") };
        params.set(k.clone(), json_to_value(v, &child_path)?);
    }
    Ok(params)
}

fn json_to_value(value: &Value, path: &str) -> Result<ParameterValue, ParametersError> {
    match value {
        Value::Null => Err(ParametersError::InvalidJson(format!("null value at '{path}'"))),
        Value::Bool(b) => Ok(ParameterValue::Bool(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(ParameterValue::Int(i)),
            None => n
                .as_f64()
                .map(ParameterValue::Float)
                .ok_or_else(|| ParametersError::InvalidJson(format!("unrepresentable number at '{path}'"))),
        },
        Value::String(s) => Ok(ParameterValue::String(s.clone())),
        Value::Array(items) => {
            let values = items
                .iter()
                .enumerate()
                .map(|(i, item)| json_to_value(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ParameterValue::List(values))
        }
        Value::Object(map) => Ok(ParameterValue::Parameters(object_to_parameters(map, path)?)),
    }
}

fn value_to_json(value: &ParameterValue) -> Value {
    match value {
        ParameterValue::Bool(b) => Value::Bool(*b),
        ParameterValue::Int(i) => Value::from(*i),
        ParameterValue::Float(f) => Value::from(*f),
        ParameterValue::String(s) => Value::String(s.clone()),
        ParameterValue::List(items) => Value::Array(items.iter().map(value_to_json).collect()),
        ParameterValue::Parameters(p) => p.to_json(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
