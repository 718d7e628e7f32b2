use super::*;
use crate::scoring::{OptionReview, review_option};

impl QuizApp {
    pub fn test_list_entries(&self) -> Vec<TestListEntry> {
        self.catalog
            .tests
            .iter()
            .map(|t| TestListEntry {
                id: t.id.clone(),
                title: t.title.clone(),
            })
            .collect()
    }

    /// Todo lo que la UI necesita para pintar las preguntas sin repetir la lógica
    pub fn question_views(&self) -> Vec<QuestionView> {
        let (Some(test), Some(attempt)) = (self.current_test(), self.attempt()) else {
            return Vec::new();
        };
        let checked = attempt.is_checked();

        test.questions
            .iter()
            .enumerate()
            .map(|(qi, q)| {
                let selected = attempt.selection(qi);
                let options = q
                    .options
                    .iter()
                    .enumerate()
                    .map(|(oi, text)| {
                        let review = if checked {
                            review_option(q, selected, oi)
                        } else {
                            OptionReview::Unmarked
                        };
                        OptionView {
                            idx: oi,
                            text: text.clone(),
                            selected: selected.contains(&oi),
                            correctly_selected: review == OptionReview::CorrectlySelected,
                            wrongly_selected: review == OptionReview::WronglySelected,
                        }
                    })
                    .collect();
                QuestionView {
                    idx: qi,
                    text: q.text.clone(),
                    single_answer: q.is_single_answer(),
                    options,
                }
            })
            .collect()
    }

    pub fn test_summary(&self) -> Option<TestSummary> {
        let test = self.current_test()?;
        let attempt = self.attempt()?;
        Some(TestSummary {
            test_id: test.id.clone(),
            title: test.title.clone(),
            all_answered: attempt.all_answered(),
            checked: attempt.is_checked(),
            celebration_visible: attempt.is_celebration_visible(),
            correct_count: attempt.correct_count(test),
            total_questions: test.questions.len(),
            next_test_title: self.next_test_title().map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::app;

    #[test]
    fn list_entries_follow_catalog_order() {
        let app = app();
        let entries = app.test_list_entries();
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
        assert_eq!(entries[0].label(), "📝 Test t1");
    }

    #[test]
    fn option_review_flags_only_after_check() {
        let mut app = app();
        app.open_test("t3").expect("t3");
        app.toggle_option(0, 0);
        app.toggle_option(1, 0);
        app.toggle_option(1, 1);

        let views = app.question_views();
        assert!(views[0].single_answer);
        assert!(!views[1].single_answer);
        assert!(views[1].options[0].selected);
        assert!(!views[1].options[0].wrongly_selected);
        assert_eq!(views[1].heading(), "2. Pregunta q2");

        app.check_answers();
        let views = app.question_views();
        assert!(views[0].options[0].correctly_selected);
        assert!(views[1].options[0].wrongly_selected);
        assert!(views[1].options[1].correctly_selected);
        // correcta sin elegir: sin marca
        let skipped = &views[1].options[2];
        assert!(!skipped.selected && !skipped.correctly_selected && !skipped.wrongly_selected);
    }

    #[test]
    fn summary_reports_progress_and_next_test() {
        let mut app = app();
        app.open_test("t3").expect("t3");
        let summary = app.test_summary().expect("resumen");
        assert!(!summary.can_check());
        assert_eq!(summary.total_questions, 2);
        assert_eq!(summary.next_test_title.as_deref(), Some("Test t1"));

        app.toggle_option(0, 0);
        app.toggle_option(1, 1);
        let summary = app.test_summary().expect("resumen");
        assert!(summary.can_check());

        app.check_answers();
        let summary = app.test_summary().expect("resumen");
        assert!(!summary.can_check());
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.score_label(), "Правильних відповідей: 1 / 2");
    }

    #[test]
    fn no_views_without_open_test() {
        let app = app();
        assert!(app.question_views().is_empty());
        assert!(app.test_summary().is_none());
    }
}
