/// Folio web
///
/// Leptos portfolio site: a card/badge kit, project cards, and the pages that
/// show them. Server-rendered with Axum, hydrated in the browser.

pub mod app;
pub mod api;
pub mod components;
pub mod pages;
pub mod render;
pub mod utils;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
