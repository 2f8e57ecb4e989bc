//! # school-admin
//!
//! Leptos + WASM admin panel for the school website. Editors manage news,
//! gallery, school info sections, contacts, the schedule and comment
//! moderation; administrators additionally manage user accounts.
//!
//! All requests go through [`net::http`], which attaches the stored bearer
//! token and evicts the session on an authentication failure.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
