//! # Feed insertion
//!
//! Renders a post card and prepends it to the feed container with a short
//! fade-in. The transition is cosmetic; ordering (most-recent-first) is the
//! invariant that matters.

use askama::Template;
use cf_core::models::Post;
use cf_ui::PostCardTemplate;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;
use crate::error::{AppError, Result};
use crate::App;

pub(crate) fn prepend_post(app: &App, post: &Post) -> Result<()> {
    let container = dom::require(&app.document, dom::POSTS_CONTAINER)?;
    let html = PostCardTemplate { post }.render()?;
    let card = dom::element_from_html(&app.document, &html)?;

    let styled: HtmlElement = card
        .clone()
        .dyn_into()
        .map_err(|_| AppError::Dom("post card root is not an html element".to_string()))?;
    styled.style().set_property("opacity", "0")?;
    styled.style().set_property("transition", "opacity 0.5s ease-in")?;

    container.insert_before(&card, container.first_child().as_ref())?;

    dom::set_timeout(&app.window, app.config.fade_in_delay_ms as i32, move || {
        let _ = styled.style().set_property("opacity", "1");
    })?;
    Ok(())
}
