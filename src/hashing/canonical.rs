//! Representación canónica de `Parameters`, base de `Parameters::hash`.
//!
//! Formato tipo JSON compacto:
//! - Claves ordenadas lexicográficamente en todos los niveles
//! - Sin espacios
//! - Strings escapados como en JSON
//! - Enteros sin parte decimal, flotantes siempre con ella (`1` vs `1.0`)
//! - `-0.0` se escribe como `0.0`, igual que compara `PartialEq`; todos los
//!   `NaN` se escriben como `NaN` y por tanto comparten hash

use serde_json::Value;

use crate::parameters::{ParameterValue, Parameters};

pub fn render_parameters(params: &Parameters) -> String {
    // `Parameters::iter` ya recorre en orden de clave.
    let items: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}:{}", quote(k), render_value(v)))
        .collect();
    format!("{{{}}}", items.join(","))
}

pub fn render_value(value: &ParameterValue) -> String {
    match value {
        ParameterValue::Bool(b) => b.to_string(),
        ParameterValue::Int(i) => i.to_string(),
        ParameterValue::Float(f) => render_float(*f),
        ParameterValue::String(s) => quote(s),
        ParameterValue::List(items) => {
            let items: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", items.join(","))
        }
        ParameterValue::Parameters(p) => render_parameters(p),
    }
}

fn render_float(f: f64) -> String {
    if f == 0.0 {
        return "0.0".to_string();
    }
    format!("{f:?}")
}

fn quote(s: &str) -> String {
    Value::from(s).to_string()
}
