// src/route.rs
//
// Rutas "/" y "/test/{id}". En web vienen del hash de la URL (`#/test/math-1`);
// en escritorio, del primer argumento de la línea de comandos.

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Test(String),
}

impl Route {
    /// Cualquier cosa que no se reconozca lleva a la portada
    pub fn parse(raw: &str) -> Route {
        let path = raw.trim().trim_start_matches('#');
        let mut parts = path.split('/').filter(|p| !p.is_empty());
        match (parts.next(), parts.next(), parts.next()) {
            (Some("test"), Some(id), None) => Route::Test(id.to_string()),
            _ => Route::Home,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Test(id) => format!("/test/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_test_route_with_or_without_hash() {
        assert_eq!(Route::parse("/test/math-1"), Route::Test("math-1".into()));
        assert_eq!(Route::parse("#/test/math-1"), Route::Test("math-1".into()));
        assert_eq!(Route::parse("test/math-1/"), Route::Test("math-1".into()));
    }

    #[test]
    fn empty_and_unknown_routes_go_home() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::Home);
        assert_eq!(Route::parse("/test"), Route::Home);
        assert_eq!(Route::parse("/test/a/b"), Route::Home);
    }

    #[test]
    fn path_matches_parser() {
        let r = Route::Test("nature".into());
        assert_eq!(r.to_path(), "/test/nature");
        assert_eq!(Route::parse(&r.to_path()), r);
        assert_eq!(Route::Home.to_path(), "/");
    }
}
