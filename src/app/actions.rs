use super::*;
use crate::attempt::CheckOutcome;

impl QuizApp {
    /// Marca/desmarca una opción de la pregunta `question_idx` del test abierto
    pub fn toggle_option(&mut self, question_idx: usize, option_idx: usize) {
        let (Some(test_idx), Some(attempt)) = (self.current_test, self.attempt.as_mut()) else {
            return;
        };
        let test = &self.catalog.tests[test_idx];

        if attempt.is_checked() {
            log::debug!("Intento comprobado: selección congelada");
            return;
        }
        if attempt.toggle(test, question_idx, option_idx) {
            log::debug!(
                "Pregunta {} -> {:?}",
                question_idx + 1,
                attempt.selection(question_idx)
            );
        }
    }

    pub fn check_answers(&mut self) {
        let (Some(test_idx), Some(attempt)) = (self.current_test, self.attempt.as_mut()) else {
            return;
        };
        let test = &self.catalog.tests[test_idx];

        match attempt.check(test) {
            CheckOutcome::Incomplete => {
                log::warn!("Comprobación rechazada: faltan preguntas por contestar");
                self.message = "⚠ Дай відповідь на всі запитання.".into();
            }
            CheckOutcome::AlreadyChecked => {}
            CheckOutcome::Checked {
                correct,
                total,
                celebration,
            } => {
                log::info!("Test {}: {correct}/{total} correctas", test.id);
                if celebration {
                    log::info!("🎉 Test {} completado sin errores", test.id);
                }
                self.message.clear();
            }
        }
    }

    /// Vuelve al estado inicial del mismo test
    pub fn reset_attempt(&mut self) {
        if let Some(attempt) = self.attempt.as_mut() {
            attempt.reset();
            log::debug!("Intento reiniciado ({})", attempt.test_id());
        }
        self.message.clear();
    }

    pub fn close_celebration(&mut self) {
        if let Some(attempt) = self.attempt.as_mut() {
            attempt.close_celebration();
        }
    }
}
