//! # Post submission
//!
//! Orchestrates the create-post request: button state, multipart payload,
//! CSRF header, and the three settle paths (success, validation failure,
//! transport failure). The button is restored on every path once the
//! request settles, before the outcome is presented.

use std::rc::Rc;

use cf_core::models::CreatePostResponse;
use cf_core::submission::SubmissionState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Event, FormData, Headers, HtmlFormElement, Request, RequestInit, Response, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::{AppError, Result};
use crate::{alerts, dom, feed, preview, App};

const SUCCESS_MESSAGE: &str = "Post created successfully!";
const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Binds the `submit` listener on the create-post form. Default browser
/// submission is suppressed unconditionally.
pub(crate) fn bind(app: Rc<App>) -> Result<()> {
    let form: HtmlFormElement = dom::require_cast(&app.document, dom::FORM)?;
    let target = form.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let app = app.clone();
        let form = target.clone();
        spawn_local(async move {
            if let Err(err) = handle_submit(&app, &form).await {
                log::error!("post submission failed: {err}");
                if let Err(err) = alerts::show(&app, "danger", GENERIC_FAILURE) {
                    log::error!("alert region unavailable: {err}");
                }
            }
        });
    });
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

async fn handle_submit(app: &Rc<App>, form: &HtmlFormElement) -> Result<()> {
    let button = dom::submit_button(form)?;
    let mut state = SubmissionState::begin(&button.inner_html());
    button.set_disabled(true);
    button.set_inner_html(&app.config.loading_label);

    let outcome = send_form(app, form).await;

    // The request has settled; restore the button before presenting the
    // outcome, whichever branch we take below.
    button.set_disabled(false);
    button.set_inner_html(state.finish());

    match outcome {
        Ok(response) if response.success => on_success(app, form, &response),
        Ok(response) => alerts::show(app, "danger", &response.error_summary()),
        Err(err) => {
            // The cause is for diagnostics only; users get the generic line.
            log::error!("create-post request failed: {err}");
            alerts::show(app, "danger", GENERIC_FAILURE)
        }
    }
}

/// Serializes the form (including any selected file) into a multipart body
/// and POSTs it with the CSRF token header. Validation failures arrive as
/// JSON with a non-2xx status, so the body is decoded unconditionally; an
/// undecodable body is a transport-level failure.
async fn send_form(app: &App, form: &HtmlFormElement) -> Result<CreatePostResponse> {
    let body = FormData::new_with_form(form)?;
    let headers = Headers::new()?;
    if let Some(token) = &app.csrf_token {
        headers.set("X-CSRFToken", token)?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(&app.config.create_post_url, &opts)?;
    let response: Response = JsFuture::from(app.window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| AppError::Js("fetch did not yield a Response".to_string()))?;

    let payload = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(payload).map_err(|err| AppError::Decode(err.to_string()))
}

fn on_success(app: &Rc<App>, form: &HtmlFormElement, response: &CreatePostResponse) -> Result<()> {
    form.reset();
    preview::clear(app)?;
    match &response.post {
        Some(post) => feed::prepend_post(app, post)?,
        None => log::warn!("success response carried no post; feed left unchanged"),
    }
    alerts::show(app, "success", SUCCESS_MESSAGE)?;
    scroll_to_top(&app.window);
    Ok(())
}

fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
