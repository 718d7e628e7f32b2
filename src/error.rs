//! Tipos de error del catálogo y de la navegación.
//!
//! Se usa `thiserror` para derivar `Display` y `Error`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Fallos al cargar o validar el catálogo de tests
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no se pudo leer el catálogo {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("YAML del catálogo inválido: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("el catálogo no contiene ningún test")]
    Empty,

    #[error("id de test duplicado: {0}")]
    DuplicateTest(String),

    #[error("test {test}: id de pregunta duplicado: {question}")]
    DuplicateQuestion { test: String, question: String },

    #[error("test {test}, pregunta {question}: {reason}")]
    InvalidQuestion {
        test: String,
        question: String,
        reason: String,
    },
}

/// Resolver un id que no existe en el catálogo; la UI muestra la pantalla "no encontrado"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("test no encontrado: {0}")]
    NotFound(String),
}
