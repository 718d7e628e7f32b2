use super::*;
use crate::error::NavigationError;
use crate::navigation::{next_test, position_of, resolve_test};

impl QuizApp {
    /// Abre un test por id con un intento nuevo; si no existe pasa a `AppState::NotFound`
    pub fn open_test(&mut self, id: &str) -> Result<(), NavigationError> {
        let test = match resolve_test(&self.catalog, id) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("{e}");
                self.current_test = None;
                self.attempt = None;
                self.missing_id = Some(id.to_string());
                self.state = AppState::NotFound;
                self.message.clear();
                self.route_changed = true;
                return Err(e);
            }
        };

        // El intento anterior se descarta sin más
        let attempt = Attempt::new(test);
        log::info!("Abriendo test {} ({} preguntas)", test.id, test.questions.len());
        self.current_test = position_of(&self.catalog, id);
        self.attempt = Some(attempt);
        self.missing_id = None;
        self.state = AppState::TestView;
        self.message.clear();
        self.route_changed = true;
        Ok(())
    }

    pub fn open_route(&mut self, route: &Route) {
        match route {
            Route::Home => self.back_to_list(),
            Route::Test(id) => {
                // El NotFound ya queda reflejado en el estado
                let _ = self.open_test(id);
            }
        }
    }

    /// Siguiente test del catálogo (circular); desde la celebración
    pub fn go_to_next_test(&mut self) {
        let next_id = match self.current_test() {
            Some(current) => match next_test(&self.catalog, &current.id) {
                Ok(next) => next.id.clone(),
                Err(e) => {
                    log::warn!("{e}");
                    return;
                }
            },
            None => return,
        };
        let _ = self.open_test(&next_id);
    }

    pub fn next_test_title(&self) -> Option<&str> {
        let current = self.current_test()?;
        next_test(&self.catalog, &current.id)
            .ok()
            .map(|t| t.title.as_str())
    }

    pub fn back_to_list(&mut self) {
        if self.state != AppState::TestList {
            log::debug!("Volviendo a la lista de tests");
            self.route_changed = true;
        }
        self.current_test = None;
        self.attempt = None;
        self.missing_id = None;
        self.state = AppState::TestList;
        self.message.clear();
    }
}
