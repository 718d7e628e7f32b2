use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Conjunto de índices de opciones (elegidas o correctas)
pub type OptionSet = BTreeSet<usize>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    #[serde(alias = "question")]
    pub text: String, // Enunciado
    pub options: Vec<String>,
    pub correct: OptionSet, // Índices correctos dentro de `options`
}

impl Question {
    /// Una sola respuesta correcta => radio; varias => casillas
    pub fn is_single_answer(&self) -> bool {
        self.correct.len() == 1
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Test {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// Catálogo completo, en el orden en que se muestra (y se recorre con "siguiente")
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub tests: Vec<Test>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    TestList,
    TestView,
    NotFound,
}
