use crate::QuizApp;
use crate::view_models::TestSummary;
use egui::{Align2, Button, Color32, Context, RichText};

/// Ventana "¡Bravo!" sobre la revisión del test
pub fn ui_celebration(app: &mut QuizApp, ctx: &Context, summary: &TestSummary) {
    let mut cerrar = false;
    let mut siguiente = false;

    egui::Window::new("celebration")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(
                    RichText::new("🎉 Браво!")
                        .color(Color32::from_rgb(22, 163, 74))
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label("Усі відповіді правильні! Ти велика молодчинка 💖");
                ui.add_space(12.0);

                cerrar = ui.add_sized([200.0, 32.0], Button::new("Закрити")).clicked();
                if let Some(label) = summary.next_test_label() {
                    ui.add_space(6.0);
                    siguiente = ui.add_sized([260.0, 32.0], Button::new(label)).clicked();
                }
            });
        });

    if siguiente {
        app.go_to_next_test();
    } else if cerrar {
        app.close_celebration();
    }
}
