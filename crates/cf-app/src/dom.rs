//! # DOM contract
//!
//! Element IDs the page guarantees, plus typed lookup helpers so the rest
//! of the crate never handles raw `Option<Element>` results.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, Window};

use crate::error::{AppError, Result};

/// The create-post form.
pub(crate) const FORM: &str = "postForm";
/// File input inside the form (Django's auto-generated widget id).
pub(crate) const IMAGE_INPUT: &str = "id_image";
/// Region the local image preview renders into.
pub(crate) const IMAGE_PREVIEW: &str = "imagePreview";
/// Feed container; new posts are prepended here.
pub(crate) const POSTS_CONTAINER: &str = "postsContainer";
/// Region alert banners append to.
pub(crate) const ALERT_CONTAINER: &str = "alertContainer";
/// Remove control rendered inside the preview fragment.
pub(crate) const REMOVE_PREVIEW: &str = "removePreview";

/// Looks up an element by id, failing with a contract violation when absent.
pub(crate) fn require(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::Dom(format!("#{id} not found")))
}

/// Looks up an element by id and casts it to a concrete interface.
pub(crate) fn require_cast<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    require(document, id)?
        .dyn_into::<T>()
        .map_err(|_| AppError::Dom(format!("#{id} has an unexpected element type")))
}

/// Finds the submit button nested in the create-post form.
pub(crate) fn submit_button(form: &HtmlFormElement) -> Result<HtmlButtonElement> {
    form.query_selector("button[type=submit]")
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::Dom(format!("#{FORM} has no submit button")))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| AppError::Dom("submit control is not a button element".to_string()))
}

/// Materializes a rendered fragment into a detached element.
pub(crate) fn element_from_html(document: &Document, html: &str) -> Result<Element> {
    let wrapper = document
        .create_element("div")
        .map_err(AppError::from)?;
    wrapper.set_inner_html(html);
    wrapper
        .first_element_child()
        .ok_or_else(|| AppError::Dom("rendered fragment is empty".to_string()))
}

/// One-shot timer. The closure is leaked into the JS heap and reclaimed
/// when the timer fires; callers never hold a cancellation handle.
pub(crate) fn set_timeout(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Result<()> {
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        )
        .map_err(AppError::from)?;
    Ok(())
}
