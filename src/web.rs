// src/web.rs
//
// Navegador: el hash de la URL (`#/test/{id}`) hace de ruta.

use crate::QuizApp;
use crate::route::Route;

pub fn read_location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

pub fn set_location_hash(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.to_path()) {
            log::warn!("No se pudo actualizar el hash: {e:?}");
        }
    }
}

/// Si el usuario cambió el hash a mano (o pulsó "atrás"), se abre esa ruta
pub fn follow_location_hash(app: &mut QuizApp) {
    let Some(hash) = read_location_hash() else {
        return;
    };
    let route = Route::parse(&hash);
    if route != app.current_route() {
        log::debug!("Hash cambiado: {hash}");
        app.open_route(&route);
        // La URL ya está al día
        let _ = app.take_route_change();
    }
}
