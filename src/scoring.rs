// src/scoring.rs
//
// Corrección pura: sin estado, sin efectos.

use crate::model::{OptionSet, Question, Test};

/// Clasificación de una opción tras comprobar.
///
/// Las opciones no elegidas (correctas o no) no se marcan: así no se
/// revelan respuestas que el alumno simplemente no tocó.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionReview {
    CorrectlySelected,
    WronglySelected,
    Unmarked,
}

/// Igualdad exacta de conjuntos: ni subconjunto ni superconjunto valen
pub fn is_question_correct(question: &Question, selected: &OptionSet) -> bool {
    *selected == question.correct
}

/// Preguntas correctas, en orden; rango `[0, test.questions.len()]`
pub fn correct_count(test: &Test, selections: &[OptionSet]) -> usize {
    test.questions
        .iter()
        .zip(selections)
        .filter(|(q, sel)| is_question_correct(q, sel))
        .count()
}

pub fn is_fully_correct(test: &Test, selections: &[OptionSet]) -> bool {
    selections.len() == test.questions.len()
        && correct_count(test, selections) == test.questions.len()
}

pub fn review_option(question: &Question, selected: &OptionSet, option: usize) -> OptionReview {
    match (selected.contains(&option), question.correct.contains(&option)) {
        (true, true) => OptionReview::CorrectlySelected,
        (true, false) => OptionReview::WronglySelected,
        (false, _) => OptionReview::Unmarked,
    }
}
