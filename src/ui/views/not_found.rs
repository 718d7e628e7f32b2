use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_not_found(app: &mut QuizApp, ctx: &Context) {
    let id = app.missing_id().unwrap_or_default().to_owned();
    let mut volver = false;

    centered_panel(ctx, 180.0, 420.0, |ui| {
        ui.heading(RichText::new("404").strong());
        ui.add_space(10.0);
        ui.label(format!("Тест «{id}» не знайдено 😔"));
        ui.add_space(16.0);
        volver = ui
            .add_sized([240.0, 36.0], Button::new("⬅️ Назад до тестів"))
            .clicked();
    });

    if volver {
        app.back_to_list();
    }
}
