pub mod access;
pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;

/// Browser entry point: builds the app context over `localStorage` and mounts
/// the router.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    console_error_panic_hook::set_once();

    let ctx = frontend::AppContext::new(
        &config::ApiConfig::from_build_env(),
        Arc::new(access::LocalStorage),
        Arc::new(api::BrowserNavigator),
    );

    match ctx {
        Ok(ctx) => {
            leptos::mount::mount_to_body(move || {
                leptos::view! { <frontend::App ctx=ctx.clone()/> }
            });
        }
        Err(e) => log::error!("invalid application configuration: {}", e),
    }
}
