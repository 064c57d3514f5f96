//! # Wire models
//!
//! These structs mirror the JSON the post-creation endpoint returns. The
//! client only ever receives immutable snapshots; there is no mutation or
//! deletion path here.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Author block attached to every post. For anonymous posts the server
/// sends `username: "Anonymous"` with the remaining fields blanked out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub username: String,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "empty_to_none")]
    pub level: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl AuthorInfo {
    /// Uppercased first character of the username, used as the avatar
    /// fallback when no profile picture exists.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// "Department · Level" suffix, or just the department when no level
    /// is set. `None` when the author has no department at all.
    pub fn affiliation(&self) -> Option<String> {
        let department = self.department.as_deref()?;
        Some(match self.level.as_deref() {
            Some(level) => format!("{department} · {level}"),
            None => department.to_string(),
        })
    }
}

/// A single feed post as returned by `POST /posts/create/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Display label, e.g. "Lost & Found".
    pub category: String,
    /// Raw choice key, e.g. "LOST_FOUND". Sent alongside the label.
    #[serde(default)]
    pub category_value: Option<String>,
    pub is_anonymous: bool,
    pub author: AuthorInfo,
    /// Pre-formatted by the server, e.g. "June 01, 2025 09:30 AM".
    pub created_at: String,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// Response envelope from the post-creation endpoint.
///
/// On success `post` is present; on validation failure `errors` maps each
/// rejected field to its message list, in the server's field order
/// (serde_json is built with `preserve_order`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostResponse {
    pub success: bool,
    #[serde(default)]
    pub post: Option<Post>,
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

impl CreatePostResponse {
    /// One user-facing line summarizing all field errors.
    pub fn error_summary(&self) -> String {
        self.errors
            .as_ref()
            .map(aggregate_field_errors)
            .unwrap_or_default()
    }
}

/// Flattens a field-error map into a single message: each field's messages
/// joined with `", "`, fields joined with a space, in map iteration order.
/// Field names are not included, matching what users of the page expect.
/// Entries that are not arrays of strings are skipped.
pub fn aggregate_field_errors(errors: &Map<String, Value>) -> String {
    let mut parts = Vec::with_capacity(errors.len());
    for messages in errors.values() {
        let Some(list) = messages.as_array() else {
            continue;
        };
        let joined = list
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if !joined.is_empty() {
            parts.push(joined);
        }
    }
    parts.join(" ")
}

/// The server blanks optional author fields to `""` instead of omitting
/// them; fold those into `None` so templates can match on presence.
fn empty_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_author() -> AuthorInfo {
        AuthorInfo {
            username: "amara".to_string(),
            department: Some("Engineering".to_string()),
            level: Some("300 Level".to_string()),
            profile_picture: None,
        }
    }

    #[test]
    fn deserializes_success_payload() {
        let raw = json!({
            "success": true,
            "post": {
                "id": 7,
                "content": "First!",
                "image_url": null,
                "category": "General",
                "category_value": "GENERAL",
                "is_anonymous": false,
                "author": {
                    "username": "amara",
                    "department": "Engineering",
                    "level": "",
                    "profile_picture": null
                },
                "created_at": "June 01, 2025 09:30 AM",
                "likes_count": 0,
                "comments_count": 0
            }
        });
        let resp: CreatePostResponse = serde_json::from_value(raw).unwrap();
        assert!(resp.success);
        let post = resp.post.unwrap();
        assert_eq!(post.author.department.as_deref(), Some("Engineering"));
        // Blank string folds to None.
        assert_eq!(post.author.level, None);
        assert_eq!(post.image_url, None);
    }

    #[test]
    fn aggregates_errors_in_field_order() {
        let raw = json!({
            "success": false,
            "errors": {
                "content": ["too long"],
                "category": ["required", "invalid"]
            }
        });
        let resp: CreatePostResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.error_summary(), "too long required, invalid");
    }

    #[test]
    fn error_summary_skips_non_array_entries() {
        let raw = json!({
            "success": false,
            "errors": { "content": "oops", "image": ["too large"] }
        });
        let resp: CreatePostResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.error_summary(), "too large");
    }

    #[test]
    fn error_summary_empty_when_no_errors() {
        let resp: CreatePostResponse =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(resp.error_summary(), "");
    }

    #[test]
    fn affiliation_joins_department_and_level() {
        let author = sample_author();
        assert_eq!(
            author.affiliation().as_deref(),
            Some("Engineering · 300 Level")
        );

        let no_level = AuthorInfo { level: None, ..sample_author() };
        assert_eq!(no_level.affiliation().as_deref(), Some("Engineering"));

        let anon = AuthorInfo {
            username: "Anonymous".to_string(),
            department: None,
            level: None,
            profile_picture: None,
        };
        assert_eq!(anon.affiliation(), None);
    }

    #[test]
    fn avatar_initial_is_uppercased() {
        assert_eq!(sample_author().initial(), "A");
        let empty = AuthorInfo {
            username: String::new(),
            department: None,
            level: None,
            profile_picture: None,
        };
        assert_eq!(empty.initial(), "?");
    }
}
