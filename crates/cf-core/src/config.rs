//! # Client configuration
//!
//! A browser script has no env vars or config files, so configuration is a
//! typed struct of defaults that the page may override through an optional
//! `<script type="application/json" id="feedConfig">` block. Every field
//! defaults independently, so partial overrides work.

use serde::Deserialize;

/// Tunables for the feed client. Defaults match the page as shipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Endpoint the create-post form submits to.
    pub create_post_url: String,
    /// Name of the ambient CSRF cookie.
    pub csrf_cookie_name: String,
    /// How long alert banners stay up before self-removing.
    pub alert_timeout_ms: u32,
    /// Delay before a freshly inserted post fades in.
    pub fade_in_delay_ms: u32,
    /// Label shown on the submit button while a request is in flight.
    pub loading_label: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            create_post_url: "/posts/create/".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            alert_timeout_ms: 5_000,
            fade_in_delay_ms: 10,
            loading_label: "Posting...".to_string(),
        }
    }
}

impl FeedConfig {
    /// Parses an in-page JSON override. A malformed block falls back to
    /// defaults with a logged warning rather than leaving the page inert.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed feed config override: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let config = FeedConfig::default();
        assert_eq!(config.create_post_url, "/posts/create/");
        assert_eq!(config.csrf_cookie_name, "csrftoken");
        assert_eq!(config.alert_timeout_ms, 5_000);
        assert_eq!(config.fade_in_delay_ms, 10);
        assert_eq!(config.loading_label, "Posting...");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = FeedConfig::from_json(r#"{ "alert_timeout_ms": 8000 }"#);
        assert_eq!(config.alert_timeout_ms, 8_000);
        assert_eq!(config.create_post_url, "/posts/create/");
    }

    #[test]
    fn malformed_override_falls_back_to_defaults() {
        let config = FeedConfig::from_json("{ not json");
        assert_eq!(config.alert_timeout_ms, 5_000);
    }
}
