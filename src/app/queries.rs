use super::*;
use crate::model::Test;

impl QuizApp {
    pub fn current_test(&self) -> Option<&Test> {
        self.current_test.and_then(|i| self.catalog.tests.get(i))
    }

    pub fn current_test_index(&self) -> Option<usize> {
        self.current_test
    }

    pub fn attempt(&self) -> Option<&Attempt> {
        self.attempt.as_ref()
    }

    /// Id pedido que no existe (pantalla "no encontrado")
    pub fn missing_id(&self) -> Option<&str> {
        self.missing_id.as_deref()
    }

    pub fn current_route(&self) -> Route {
        match (self.state, self.current_test()) {
            (AppState::TestView, Some(test)) => Route::Test(test.id.clone()),
            (AppState::NotFound, _) => {
                Route::Test(self.missing_id.clone().unwrap_or_default())
            }
            _ => Route::Home,
        }
    }

    pub fn is_celebration_visible(&self) -> bool {
        self.attempt
            .as_ref()
            .is_some_and(|a| a.is_celebration_visible())
    }
}
