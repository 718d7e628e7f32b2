// src/navigation.rs

use crate::error::NavigationError;
use crate::model::{Catalog, Test};

pub fn position_of(catalog: &Catalog, id: &str) -> Option<usize> {
    catalog.tests.iter().position(|t| t.id == id)
}

/// Busca un test por id; si no existe, la UI debe mostrar "no encontrado"
pub fn resolve_test<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Test, NavigationError> {
    catalog
        .tests
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| NavigationError::NotFound(id.to_string()))
}

/// Siguiente en el orden del catálogo, volviendo al primero tras el último.
/// Con un único test devuelve ese mismo test.
pub fn next_test<'a>(catalog: &'a Catalog, current_id: &str) -> Result<&'a Test, NavigationError> {
    let current = position_of(catalog, current_id)
        .ok_or_else(|| NavigationError::NotFound(current_id.to_string()))?;
    let next = (current + 1) % catalog.tests.len();
    Ok(&catalog.tests[next])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::fixtures::{question, test};

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog {
            tests: ids
                .iter()
                .map(|id| test(id, vec![question("q1", 2, &[0])]))
                .collect(),
        }
    }

    #[test]
    fn resolves_existing_test() {
        let c = catalog(&["a", "b", "c"]);
        assert_eq!(resolve_test(&c, "b").map(|t| t.id.as_str()), Ok("b"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let c = catalog(&["a", "b"]);
        assert_eq!(
            resolve_test(&c, "does-not-exist").map(|t| t.id.clone()),
            Err(NavigationError::NotFound("does-not-exist".into()))
        );
    }

    #[test]
    fn next_follows_catalog_order() {
        let c = catalog(&["a", "b", "c"]);
        assert_eq!(next_test(&c, "a").map(|t| t.id.as_str()), Ok("b"));
        assert_eq!(next_test(&c, "b").map(|t| t.id.as_str()), Ok("c"));
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let c = catalog(&["a", "b", "c"]);
        assert_eq!(next_test(&c, "c").map(|t| t.id.as_str()), Ok("a"));
    }

    #[test]
    fn single_test_catalog_wraps_to_itself() {
        let c = catalog(&["solo"]);
        assert_eq!(next_test(&c, "solo").map(|t| t.id.as_str()), Ok("solo"));
    }

    #[test]
    fn next_of_unknown_id_is_not_found() {
        let c = catalog(&["a"]);
        assert!(matches!(
            next_test(&c, "zzz"),
            Err(NavigationError::NotFound(id)) if id == "zzz"
        ));
    }
}
