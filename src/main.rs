use rozumnychka_quiz::config::AppConfig;
use rozumnychka_quiz::route::Route;
use rozumnychka_quiz::ui::create_app;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use rozumnychka_quiz::data::load_catalog;

    pretty_env_logger::init();

    let config = AppConfig::from_env();
    let catalog = match load_catalog(&config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("No se pudo cargar el catálogo: {e}");
            std::process::exit(1);
        }
    };

    // Ruta opcional como primer argumento: `/test/math-1`
    let route = std::env::args()
        .nth(1)
        .map(|arg| Route::parse(&arg))
        .unwrap_or_default();
    log::info!("Arrancando con {} tests en {}", catalog.len(), route.to_path());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(create_app(cc, &config, catalog, &route)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use rozumnychka_quiz::data::read_catalog_embedded;
    use rozumnychka_quiz::web::read_location_hash;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("No hay window")
            .document()
            .expect("No hay document");
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("No se encontró the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id no es un canvas");

        let config = AppConfig::default();
        // En web sólo existe el catálogo embebido (validado por test)
        let catalog = match read_catalog_embedded() {
            Ok(c) => c,
            Err(e) => {
                log::error!("Catálogo embebido inválido: {e}");
                return;
            }
        };
        let route = read_location_hash()
            .map(|h| Route::parse(&h))
            .unwrap_or_default();

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(create_app(cc, &config, catalog, &route)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Fallo al arrancar eframe: {e:?}");
        }
    });
}
