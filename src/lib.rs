//! # codecraft-ui
//!
//! Leptos + WASM frontend for the CodeCraft Academy learning platform.
//!
//! This crate contains the section router, the local session store, the
//! sign-in/sign-up flow, simulated service backends, static catalogs, and the
//! page/component tree. Everything outside `hydrate`-gated glue is plain Rust
//! and unit-tested natively.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
