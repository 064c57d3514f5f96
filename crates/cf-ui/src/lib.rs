//! # cf-ui
//!
//! Markup fragments for the feed page, rendered with Askama. Templates
//! escape interpolated fields by default, so post content, usernames, and
//! category labels cannot inject markup into the feed.

use askama::Template;
use cf_core::models::Post;

/// A single post card, inserted at the top of the feed container.
#[derive(Template)]
#[template(path = "post_card.html")]
pub struct PostCardTemplate<'a> {
    pub post: &'a Post,
}

/// A dismissible alert banner. `severity` is the toolkit's class suffix,
/// e.g. "success" or "danger".
#[derive(Template)]
#[template(path = "alert.html")]
pub struct AlertTemplate<'a> {
    pub severity: &'a str,
    pub message: &'a str,
}

/// Thumbnail plus remove control shown after an image is selected for
/// upload. `data_url` is the locally read file, not a server URL.
#[derive(Template)]
#[template(path = "image_preview.html")]
pub struct ImagePreviewTemplate<'a> {
    pub data_url: &'a str,
}
