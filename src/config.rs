// src/config.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CATALOG_ENV: &str = "QUIZ_CATALOG";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub dark_mode: bool,
    /// `None` => catálogo embebido
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "🌸 Тести для розумнички".to_string(),
            window_size: [820.0, 720.0],
            dark_mode: false,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Valores por defecto + `QUIZ_CATALOG` si está definida y no vacía
    pub fn from_env() -> Self {
        Self::default().with_catalog_var(std::env::var(CATALOG_ENV).ok())
    }

    fn with_catalog_var(mut self, value: Option<String>) -> Self {
        self.catalog_path = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self
    }
}

/// Lo único que se guarda entre sesiones: preferencias de interfaz, nunca el progreso
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

impl From<&AppConfig> for UiPrefs {
    fn from(config: &AppConfig) -> Self {
        Self {
            dark_mode: config.dark_mode,
        }
    }
}
