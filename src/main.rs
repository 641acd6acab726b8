//! Demo: construye un `Parameters` desde el entorno (.env incluido), añade
//! algunos valores fijos e imprime su forma canónica y su hash.

use imageserver_parameters::config::{parameters_from_env, CONFIG};
use imageserver_parameters::Parameters;

fn main() {
    let mut params = match parameters_from_env() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error al cargar parámetros desde el entorno: {e}");
            std::process::exit(1);
        }
    };
    println!("Variables con prefijo {}: {}", CONFIG.prefix, params.len());

    params.set("width", 100);
    params.set("height", 200);
    params.set("processor", Parameters::new().with("format", "png").with("quality", 90));

    match params.get_int("width") {
        Ok(w) => println!("width = {w}"),
        Err(e) => println!("width no disponible: {e}"),
    }
    if let Err(e) = params.get_string("width") {
        println!("get_string(\"width\") -> {e}");
    }
    if let Err(e) = params.get("missing") {
        println!("get(\"missing\") -> {e}");
    }

    println!("canónico: {params}");
    println!("hash: {}", params.hash());
}
