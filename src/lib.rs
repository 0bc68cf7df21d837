mod components;
pub mod config;
mod pages;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting campus affairs portal (wasm)");
    router::mount_app();
}
