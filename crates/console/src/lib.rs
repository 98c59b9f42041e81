//! `iamview-console` — browser glue for the account review console.
//!
//! **Responsibility:** bind the headless semantics of `iamview-core` to the
//! server-rendered pages via `web-sys`.
//!
//! The server renders all markup; this crate only reacts to events, fetches
//! detail JSON and injects structured nodes. One bundle is loaded on every
//! page, so each component binds itself only when its elements are present.
//! Everything here is WASM-only; all testable behavior lives in the core
//! crate.

#[cfg(target_arch = "wasm32")]
pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod forms;
#[cfg(target_arch = "wasm32")]
pub mod navbar;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod panels;
#[cfg(target_arch = "wasm32")]
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod search;
#[cfg(target_arch = "wasm32")]
pub mod tags;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = page::wire() {
        web_sys::console::error_1(&err);
    }
}
