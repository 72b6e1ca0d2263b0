//! Client-side behaviour for the book exchange pages: password reveal toggles and
//! "I want this book" like buttons backed by `POST /like-book/{id}`.
//!
//! Server-rendered pages get enhanced on load (see [`dom`]); pages built with Leptos can
//! use the components in [`components`] instead.

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod like;
pub mod models;
pub mod password;

use crate::components::BookFeed;
use crate::config::EnvConfig;
use crate::models::BookSummary;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `onclick="togglePassword()"` target for the login and signup templates.
#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password() {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        password::toggle_password_field(&document, password::PASSWORD_INPUT_ID);
    }
}

pub(crate) fn parse_books(books_json: &str) -> Result<Vec<BookSummary>, String> {
    serde_json::from_str(books_json).map_err(|e| format!("invalid books payload: {e}"))
}

/// Mount a Leptos-rendered feed of book posts into the element matching `selector`.
#[wasm_bindgen(js_name = mountBookFeed)]
pub fn mount_book_feed(selector: &str, books_json: &str) -> Result<(), JsValue> {
    let books = parse_books(books_json).map_err(|e| JsValue::from_str(&e))?;

    let parent = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("no element matches {selector}")))?;

    let config = EnvConfig::new();
    leptos::mount::mount_to(parent, move || {
        provide_context(config);
        view! { <BookFeed books=books /> }
    })
    .forget();
    Ok(())
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    // Like handlers spawn their requests on the Leptos executor, mounted or not.
    let _ = any_spawner::Executor::init_wasm_bindgen();

    let config = EnvConfig::new();
    dom::on_dom_ready(move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            dom::bind_like_buttons(&document, &config);
        }
    });
}
