//! # AppError
//!
//! Centralized error handling for the wasm glue layer. Everything that can
//! go wrong here is either a DOM contract violation, a JavaScript interop
//! failure, or a payload we could not decode.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// The primary error type for all cf-app operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// An element named by the DOM contract is missing or has the wrong type.
    #[error("DOM contract violation: {0}")]
    Dom(String),

    /// JavaScript interop error (fetch, FileReader, timers).
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The response body could not be decoded into the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// Template rendering failure.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        AppError::Js(message)
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A specialized Result type for the glue layer.
pub type Result<T> = std::result::Result<T, AppError>;
