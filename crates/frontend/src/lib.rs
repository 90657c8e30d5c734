pub mod app;
pub mod app_shell;
pub mod binding;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

/// Id of the element the application mounts into.
pub const MOUNT_POINT: &str = "app";

pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Hello from rust!");

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => leptos::mount::mount_to(root, app::App).forget(),
        None => {
            log::warn!("#{} not found, mounting to <body>", MOUNT_POINT);
            leptos::mount::mount_to_body(app::App);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
