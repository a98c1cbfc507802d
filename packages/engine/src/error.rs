//! Setup errors
//!
//! The controller itself never fails (invalid edits are no-ops); only wiring
//! the sandbox into a page or parsing its config can go wrong.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("window has no `document`")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("2D canvas context not available")]
    NoCanvasContext,

    #[error("invalid sandbox config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SandboxError {
    fn from(value: JsValue) -> Self {
        SandboxError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SandboxError> for JsValue {
    fn from(err: SandboxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SandboxError>;
