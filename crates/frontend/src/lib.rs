pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Точка входа wasm: логирование в консоль браузера и монтирование приложения
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("AI insights panel starting");

    leptos::mount::mount_to_body(app::App);
}
