mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::config::{AppConfig, UiPrefs};
use crate::model::{AppState, Catalog};
use crate::route::Route;
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::{apply_theme, bottom_panel, top_panel};

/// Construye la app a partir del catálogo ya cargado y la ruta inicial
pub fn create_app(
    cc: &CreationContext<'_>,
    config: &AppConfig,
    catalog: Catalog,
    route: &Route,
) -> QuizApp {
    // Sólo se recupera el tema; el progreso nunca se guarda
    let prefs = cc
        .storage
        .and_then(|s| get_value::<UiPrefs>(s, APP_KEY))
        .unwrap_or_else(|| UiPrefs::from(config));
    apply_theme(&cc.egui_ctx, prefs.dark_mode);

    QuizApp::with_route(catalog, prefs, route)
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        #[cfg(target_arch = "wasm32")]
        crate::web::follow_location_hash(self);

        // BOTÓN SUPERIOR "VOLVER" (fuera de la lista de tests)
        if !matches!(self.state, AppState::TestList) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        match self.state {
            AppState::TestList => views::test_list::ui_test_list(self, ctx),
            AppState::TestView => views::test::ui_test(self, ctx),
            AppState::NotFound => views::not_found::ui_not_found(self, ctx),
        }

        if let Some(route) = self.take_route_change() {
            log::debug!("Ruta: {}", route.to_path());
            #[cfg(target_arch = "wasm32")]
            crate::web::set_location_hash(&route);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
