//! # Image preview
//!
//! Shows a local thumbnail of the file selected for upload, with a remove
//! control. Reads go through `FileReader`; handles are fire-and-forget.

use std::rc::Rc;

use askama::Template;
use cf_ui::ImagePreviewTemplate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FileReader, HtmlElement, HtmlInputElement};

use crate::dom;
use crate::error::Result;
use crate::App;

/// Binds the `change` listener on the file input. The listener lives for
/// the page, so its closure is intentionally leaked.
pub(crate) fn bind(app: Rc<App>) -> Result<()> {
    let input: HtmlInputElement = dom::require_cast(&app.document, dom::IMAGE_INPUT)?;
    let target = input.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = on_selection_changed(&app, &target) {
            log::error!("image preview failed: {err}");
        }
    });
    input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn on_selection_changed(app: &Rc<App>, input: &HtmlInputElement) -> Result<()> {
    // A cancelled selection leaves any existing preview untouched. Known
    // gap carried over from the page's original behavior: a stale preview
    // survives until the remove control is used.
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(());
    };

    let reader = FileReader::new()?;
    let source = reader.clone();
    let app = app.clone();
    let onload = Closure::once_into_js(move || {
        match source.result().ok().and_then(|value| value.as_string()) {
            Some(data_url) => {
                if let Err(err) = render_preview(&app, &data_url) {
                    log::error!("image preview failed: {err}");
                }
            }
            None => log::error!("file read produced no data url"),
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.read_as_data_url(&file)?;
    Ok(())
}

fn render_preview(app: &Rc<App>, data_url: &str) -> Result<()> {
    let region = dom::require(&app.document, dom::IMAGE_PREVIEW)?;
    let html = ImagePreviewTemplate { data_url }.render()?;
    region.set_inner_html(&html);

    let remove: HtmlElement = dom::require_cast(&app.document, dom::REMOVE_PREVIEW)?;
    let app = app.clone();
    let on_remove = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = clear(&app) {
            log::error!("clearing image preview failed: {err}");
        }
    });
    remove.add_event_listener_with_callback("click", on_remove.as_ref().unchecked_ref())?;
    // Discarded together with the control when the region is next cleared.
    on_remove.forget();
    Ok(())
}

/// Empties the preview region and resets the file input. Also used by the
/// submission flow after a post goes through.
pub(crate) fn clear(app: &App) -> Result<()> {
    let input: HtmlInputElement = dom::require_cast(&app.document, dom::IMAGE_INPUT)?;
    input.set_value("");
    let region = dom::require(&app.document, dom::IMAGE_PREVIEW)?;
    region.set_inner_html("");
    Ok(())
}
