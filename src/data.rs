// src/data.rs

use crate::config::AppConfig;
use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Question, Test};
use std::collections::HashSet;
use std::path::Path;

/// Carga el catálogo de tests desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog> {
    let file_content = include_str!("data/tests.yaml");
    parse_catalog(file_content)
}

/// Catálogo externo si la configuración lo indica; si no, el embebido
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            log::info!("Cargando catálogo desde {}", path.display());
            read_catalog_file(path)
        }
        None => read_catalog_embedded(),
    }
}

/// Carga un catálogo externo (ruta de `AppConfig::catalog_path`)
pub fn read_catalog_file(path: &Path) -> Result<Catalog> {
    let file_content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&file_content)
}

/// Parsea y valida; el resto de la app da por hecho que el catálogo es correcto
pub fn parse_catalog(yaml: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    validate_catalog(&catalog)?;
    log::debug!("Catálogo cargado: {} tests", catalog.len());
    Ok(catalog)
}

pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut test_ids = HashSet::new();
    for test in &catalog.tests {
        if !test_ids.insert(test.id.as_str()) {
            return Err(CatalogError::DuplicateTest(test.id.clone()));
        }
        validate_test(test)?;
    }
    Ok(())
}

fn validate_test(test: &Test) -> Result<()> {
    let mut question_ids = HashSet::new();
    for q in &test.questions {
        if !question_ids.insert(q.id.as_str()) {
            return Err(CatalogError::DuplicateQuestion {
                test: test.id.clone(),
                question: q.id.clone(),
            });
        }
        validate_question(test, q)?;
    }
    Ok(())
}

fn validate_question(test: &Test, q: &Question) -> Result<()> {
    let invalid = |reason: String| CatalogError::InvalidQuestion {
        test: test.id.clone(),
        question: q.id.clone(),
        reason,
    };

    if q.options.len() < 2 {
        return Err(invalid(format!(
            "necesita al menos 2 opciones, tiene {}",
            q.options.len()
        )));
    }
    if q.correct.is_empty() {
        return Err(invalid("sin respuestas correctas".into()));
    }
    // BTreeSet ordenado: basta con mirar el último
    if let Some(&max) = q.correct.last() {
        if max >= q.options.len() {
            return Err(invalid(format!(
                "índice correcto {max} fuera de rango (opciones: {})",
                q.options.len()
            )));
        }
    }
    Ok(())
}
