use crate::QuizApp;
use crate::ui::helpers::{option_control, option_fill};
use crate::ui::layout::scroll_panel;
use crate::ui::views::celebration::ui_celebration;
use crate::view_models::{QuestionView, TestSummary};
use egui::{Button, Context, RichText, Ui};

pub fn ui_test(app: &mut QuizApp, ctx: &Context) {
    let Some(summary) = app.test_summary() else {
        app.back_to_list();
        return;
    };
    let questions = app.question_views();
    let message = app.message.clone();

    let mut toggled: Option<(usize, usize)> = None;
    let mut comprobar = false;
    let mut reiniciar = false;

    scroll_panel(ctx, 720.0, |ui| {
        ui.add_space(10.0);
        ui.heading(RichText::new(summary.title_label()).strong());
        ui.add_space(16.0);

        for q in &questions {
            if let Some(o) = question_card(ui, q, summary.checked) {
                toggled = Some((q.idx, o));
            }
            ui.add_space(10.0);
        }

        (comprobar, reiniciar) = action_row(ui, &summary);

        if summary.checked {
            ui.add_space(8.0);
            ui.label(RichText::new(summary.score_label()).strong());
        }
        if !message.is_empty() {
            ui.add_space(8.0);
            ui.label(&message);
        }
        ui.add_space(20.0);
    });

    if let Some((q, o)) = toggled {
        app.toggle_option(q, o);
    }
    if comprobar {
        app.check_answers();
    }
    if reiniciar {
        app.reset_attempt();
    }

    // El resumen se recalcula: la comprobación de este frame puede abrir la celebración
    if let Some(summary) = app.test_summary() {
        if summary.celebration_visible {
            ui_celebration(app, ctx, &summary);
        }
    }
}

/// Devuelve la opción pulsada, si hubo alguna
fn question_card(ui: &mut Ui, q: &QuestionView, checked: bool) -> Option<usize> {
    let mut clicked = None;
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(16, 12))
        .corner_radius(egui::CornerRadius::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(RichText::new(q.heading()).strong().size(17.0));
                ui.add_space(6.0);

                for option in &q.options {
                    egui::Frame::default()
                        .fill(option_fill(option, checked))
                        .inner_margin(egui::Margin::symmetric(8, 4))
                        .corner_radius(egui::CornerRadius::same(8))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            if option_control(ui, option, q.single_answer, !checked) {
                                clicked = Some(option.idx);
                            }
                        });
                    ui.add_space(2.0);
                }
            });
        });
    clicked
}

/// Devuelve (comprobar, reiniciar)
fn action_row(ui: &mut Ui, summary: &TestSummary) -> (bool, bool) {
    let mut comprobar = false;
    let mut reiniciar = false;
    ui.horizontal(|ui| {
        let buttons_w = if summary.checked { 2.0 * 200.0 + 8.0 } else { 200.0 };
        ui.add_space(((ui.available_width() - buttons_w) / 2.0).max(0.0));

        comprobar = ui
            .add_enabled(
                summary.can_check(),
                Button::new("✅ Перевірити").min_size(egui::vec2(200.0, 40.0)),
            )
            .clicked();

        if summary.checked {
            reiniciar = ui
                .add_sized([200.0, 40.0], Button::new("🔄 Почати наново"))
                .clicked();
        }
    });
    (comprobar, reiniciar)
}
