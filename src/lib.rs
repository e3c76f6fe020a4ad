#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod clipboard;
pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod reveal;
pub mod theme;
pub mod timer;
pub mod transport;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("should be able to init console logger");

    if let Err(e) = config::SiteConfig::global() {
        panic!("{e}");
    }

    leptos::mount::hydrate_body(App);
}
