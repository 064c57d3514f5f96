//! # cf-core
//!
//! The pure domain layer of the CampusFeed browser client: wire models,
//! cookie parsing, submission state, relative-time formatting, and client
//! configuration. Nothing in this crate touches the DOM, so everything here
//! is testable on the host.

pub mod config;
pub mod cookie;
pub mod models;
pub mod submission;
pub mod timeago;

// Re-exporting for easier access in other crates
pub use config::FeedConfig;
pub use cookie::read_cookie;
pub use models::{aggregate_field_errors, AuthorInfo, CreatePostResponse, Post};
pub use submission::SubmissionState;
pub use timeago::{relative_age, time_since};
