use crate::attempt::Attempt;
use crate::config::UiPrefs;
use crate::model::{AppState, Catalog};
use crate::route::Route;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{OptionView, QuestionView, TestListEntry, TestSummary};

/// Controlador: un único intento vivo, el del test que se está mostrando
pub struct QuizApp {
    pub catalog: Catalog,
    pub state: AppState,
    pub prefs: UiPrefs,
    pub message: String,
    current_test: Option<usize>, // índice en catalog.tests
    attempt: Option<Attempt>,
    missing_id: Option<String>,
    route_changed: bool,
}

impl QuizApp {
    pub fn new(catalog: Catalog, prefs: UiPrefs) -> Self {
        Self {
            catalog,
            state: AppState::TestList,
            prefs,
            message: String::new(),
            current_test: None,
            attempt: None,
            missing_id: None,
            route_changed: false,
        }
    }

    /// Arranca directamente en la ruta indicada (hash de la URL o argumento)
    pub fn with_route(catalog: Catalog, prefs: UiPrefs, route: &Route) -> Self {
        let mut app = Self::new(catalog, prefs);
        app.open_route(route);
        app.route_changed = false;
        app
    }

    /// La ruta cambió desde la última llamada (para sincronizar el hash en web)
    pub fn take_route_change(&mut self) -> Option<Route> {
        if std::mem::take(&mut self.route_changed) {
            Some(self.current_route())
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::scoring::fixtures::{question, test};

    /// t1: una pregunta de respuesta única; t2: una de respuesta múltiple; t3: mixta
    pub fn catalog() -> Catalog {
        Catalog {
            tests: vec![
                test("t1", vec![question("q1", 3, &[1])]),
                test("t2", vec![question("q1", 4, &[0, 2])]),
                test(
                    "t3",
                    vec![question("q1", 2, &[0]), question("q2", 3, &[1, 2])],
                ),
            ],
        }
    }

    pub fn app() -> QuizApp {
        QuizApp::new(catalog(), UiPrefs { dark_mode: false })
    }
}
