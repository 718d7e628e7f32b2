// src/attempt.rs
//
// Estado de un intento sobre el test abierto: Abierto -> Comprobado -> (reset) Abierto.
// Al navegar a otro test el intento se descarta entero.

use crate::model::{OptionSet, Test};
use crate::scoring::{correct_count, is_fully_correct};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Falta alguna pregunta por contestar; no cambia nada
    Incomplete,
    AlreadyChecked,
    Checked {
        correct: usize,
        total: usize,
        celebration: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    test_id: String,
    selections: Vec<OptionSet>, // una entrada por pregunta, mismo orden
    checked: bool,
    celebration_visible: bool,
}

impl Attempt {
    pub fn new(test: &Test) -> Self {
        Self {
            test_id: test.id.clone(),
            selections: vec![OptionSet::new(); test.questions.len()],
            checked: false,
            celebration_visible: false,
        }
    }

    pub fn test_id(&self) -> &str {
        &self.test_id
    }

    pub fn selections(&self) -> &[OptionSet] {
        &self.selections
    }

    pub fn selection(&self, question_idx: usize) -> &OptionSet {
        &self.selections[question_idx]
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_celebration_visible(&self) -> bool {
        self.celebration_visible
    }

    /// Todas las preguntas tienen al menos una opción elegida (no tienen por qué ser correctas)
    pub fn all_answered(&self) -> bool {
        self.selections.iter().all(|s| !s.is_empty())
    }

    pub fn correct_count(&self, test: &Test) -> usize {
        self.debug_assert_same_test(test);
        correct_count(test, &self.selections)
    }

    /// Devuelve `true` si la selección cambió.
    ///
    /// Índices fuera de rango son un error del llamador: se aborta en vez de recortar.
    pub fn toggle(&mut self, test: &Test, question_idx: usize, option_idx: usize) -> bool {
        self.debug_assert_same_test(test);
        assert!(
            question_idx < test.questions.len(),
            "pregunta {question_idx} fuera de rango (test {} tiene {})",
            test.id,
            test.questions.len()
        );
        let question = &test.questions[question_idx];
        assert!(
            option_idx < question.options.len(),
            "opción {option_idx} fuera de rango (pregunta {} tiene {})",
            question.id,
            question.options.len()
        );

        // Congelado para revisión
        if self.checked {
            return false;
        }

        let selected = &mut self.selections[question_idx];
        if question.is_single_answer() {
            // "elige exactamente una": volver a pulsar la misma no la desmarca
            if selected.len() == 1 && selected.contains(&option_idx) {
                return false;
            }
            selected.clear();
            selected.insert(option_idx);
        } else if !selected.remove(&option_idx) {
            selected.insert(option_idx);
        }
        true
    }

    pub fn check(&mut self, test: &Test) -> CheckOutcome {
        self.debug_assert_same_test(test);
        if self.checked {
            return CheckOutcome::AlreadyChecked;
        }
        if !self.all_answered() {
            return CheckOutcome::Incomplete;
        }

        self.checked = true;
        self.refresh_celebration(test);

        CheckOutcome::Checked {
            correct: correct_count(test, &self.selections),
            total: test.questions.len(),
            celebration: self.celebration_visible,
        }
    }

    pub fn reset(&mut self) {
        for s in &mut self.selections {
            s.clear();
        }
        self.checked = false;
        self.celebration_visible = false;
    }

    /// Cierra la ventana de celebración; la revisión sigue visible
    pub fn close_celebration(&mut self) {
        self.celebration_visible = false;
    }

    // La celebración sólo aparece con el intento comprobado y todo correcto
    fn refresh_celebration(&mut self, test: &Test) {
        if self.checked && is_fully_correct(test, &self.selections) {
            self.celebration_visible = true;
        }
    }

    fn debug_assert_same_test(&self, test: &Test) {
        debug_assert_eq!(self.test_id, test.id, "intento de otro test");
        debug_assert_eq!(self.selections.len(), test.questions.len());
    }
}
