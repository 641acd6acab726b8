//! Módulo de hashing y representación canónica de parámetros.

pub mod canonical;
pub mod hash;

pub use canonical::{render_parameters, render_value};
pub use hash::hash_str;
