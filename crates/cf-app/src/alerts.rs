//! # Alert banners
//!
//! Transient, dismissible notifications appended to the alert region.

use askama::Template;
use cf_ui::AlertTemplate;

use crate::dom;
use crate::error::Result;
use crate::App;

/// Renders an alert of the given severity ("success", "danger") into the
/// alert region. The banner self-removes after the configured delay; the
/// embedded close control lets the page's UI toolkit dismiss it earlier.
pub(crate) fn show(app: &App, severity: &str, message: &str) -> Result<()> {
    let container = dom::require(&app.document, dom::ALERT_CONTAINER)?;
    let html = AlertTemplate { severity, message }.render()?;
    let banner = dom::element_from_html(&app.document, &html)?;
    container.append_child(&banner)?;

    // Element::remove is a no-op on detached nodes, so racing a manual
    // dismissal is harmless.
    let doomed = banner.clone();
    dom::set_timeout(&app.window, app.config.alert_timeout_ms as i32, move || {
        doomed.remove();
    })?;
    Ok(())
}
