// src/view_models.rs

#[derive(Clone, Debug)]
pub struct TestListEntry {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub idx: usize,
    pub text: String,
    pub selected: bool,
    // Sólo tienen sentido con el intento comprobado
    pub correctly_selected: bool,
    pub wrongly_selected: bool,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub idx: usize,
    pub text: String,
    pub single_answer: bool,
    pub options: Vec<OptionView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestSummary {
    pub test_id: String,
    pub title: String,
    pub all_answered: bool,
    pub checked: bool,
    pub celebration_visible: bool,
    pub correct_count: usize,
    pub total_questions: usize,
    pub next_test_title: Option<String>,
}

impl TestListEntry {
    pub fn label(&self) -> String {
        format!("📝 {}", self.title)
    }
}

impl QuestionView {
    /// "1. Скільки буде 2 + 3?"
    pub fn heading(&self) -> String {
        format!("{}. {}", self.idx + 1, self.text)
    }
}

impl TestSummary {
    pub fn can_check(&self) -> bool {
        self.all_answered && !self.checked
    }

    pub fn score_label(&self) -> String {
        format!("Правильних відповідей: {} / {}", self.correct_count, self.total_questions)
    }

    pub fn title_label(&self) -> String {
        format!("📝 {}", self.title)
    }

    pub fn next_test_label(&self) -> Option<String> {
        self.next_test_title
            .as_ref()
            .map(|t| format!("👉 Наступний тест: {t}"))
    }
}
