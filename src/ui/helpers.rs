// src/ui/helpers.rs
use crate::view_models::OptionView;
use egui::{Button, Checkbox, Color32, RadioButton, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Fondo de una opción: azul si está elegida y sin comprobar;
/// tras comprobar, verde (bien elegida) o rojo (mal elegida).
/// Las no elegidas nunca se colorean.
pub fn option_fill(option: &OptionView, checked: bool) -> Color32 {
    if checked {
        if option.correctly_selected {
            Color32::from_rgba_unmultiplied(34, 197, 94, 90)
        } else if option.wrongly_selected {
            Color32::from_rgba_unmultiplied(239, 68, 68, 90)
        } else {
            Color32::TRANSPARENT
        }
    } else if option.selected {
        Color32::from_rgba_unmultiplied(59, 130, 246, 60)
    } else {
        Color32::TRANSPARENT
    }
}

/// Radio (respuesta única) o casilla (múltiple); devuelve true si se pulsó
pub fn option_control(ui: &mut Ui, option: &OptionView, single_answer: bool, enabled: bool) -> bool {
    if single_answer {
        ui.add_enabled(enabled, RadioButton::new(option.selected, option.text.as_str()))
            .clicked()
    } else {
        let mut value = option.selected;
        ui.add_enabled(enabled, Checkbox::new(&mut value, option.text.as_str()))
            .changed()
    }
}
