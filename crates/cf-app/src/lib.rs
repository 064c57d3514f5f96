//! # cf-app
//!
//! The wasm-bindgen glue for the CampusFeed page: binds the create-post
//! form and the image input, talks to the post-creation endpoint, and
//! renders results through `cf-ui`. Compiled as a `cdylib` and loaded by
//! the page; `start` runs once at module instantiation.

mod alerts;
mod dom;
mod error;
mod feed;
mod preview;
mod submit;

pub use error::{AppError, Result};

use std::rc::Rc;

use cf_core::{read_cookie, FeedConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument, Window};

/// Id of the optional in-page JSON config block.
const CONFIG_ELEMENT: &str = "feedConfig";

/// Shared page context. Single-threaded and event-driven, so a plain `Rc`
/// is all the sharing the listeners need.
pub(crate) struct App {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: FeedConfig,
    /// Read once at startup; treated as immutable for the page's lifetime.
    pub(crate) csrf_token: Option<String>,
}

#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| AppError::Js("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Js("no document".to_string()))?;

    let config = load_config(&document);
    let csrf_token = read_csrf_token(&document, &config);
    if csrf_token.is_none() {
        log::warn!(
            "cookie '{}' not found; the server will reject submissions",
            config.csrf_cookie_name
        );
    }

    let app = Rc::new(App {
        window,
        document,
        config,
        csrf_token,
    });

    // A page without the expected elements stays inert instead of trapping;
    // the two controllers are independent, so bind each on its own.
    if let Err(err) = submit::bind(app.clone()) {
        log::error!("create-post form not bound: {err}");
    }
    if let Err(err) = preview::bind(app) {
        log::error!("image preview not bound: {err}");
    }
    Ok(())
}

fn load_config(document: &Document) -> FeedConfig {
    match document.get_element_by_id(CONFIG_ELEMENT) {
        Some(element) => {
            let raw = element.text_content().unwrap_or_default();
            FeedConfig::from_json(&raw)
        }
        None => FeedConfig::default(),
    }
}

fn read_csrf_token(document: &Document, config: &FeedConfig) -> Option<String> {
    let html_document = document.dyn_ref::<HtmlDocument>()?;
    let cookies = html_document.cookie().ok()?;
    read_cookie(&cookies, &config.csrf_cookie_name)
}
