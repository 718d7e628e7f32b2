use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use crate::view_models::TestListEntry;
use egui::Context;

pub fn ui_test_list(app: &mut QuizApp, ctx: &Context) {
    let entries: Vec<TestListEntry> = app.test_list_entries();
    let button_h = 44.0;
    let estimated_h = 80.0 + (button_h + 8.0) * entries.len() as f32;

    let mut clicked: Option<String> = None;
    centered_panel(ctx, estimated_h, 520.0, |ui| {
        ui.heading("🌸 Оберіть тест для розумнички 🌟");
        ui.add_space(20.0);

        let width = ui.available_width();
        for entry in &entries {
            if big_list_button(ui, entry.label(), width, button_h, true) {
                clicked = Some(entry.id.clone());
            }
            ui.add_space(8.0);
        }
    });

    if let Some(id) = clicked {
        // Los ids salen del propio catálogo: no puede fallar
        let _ = app.open_test(&id);
    }
}
