use thiserror::Error;
use wasm_bindgen::JsValue;

pub mod ambient;
pub mod particles;
pub mod reveal;
pub mod ticker;

/// Reasons an animation layer could not start. None of these are fatal: the
/// affected layer falls back to static rendering.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("performance clock unavailable")]
    NoClock,
    #[error("canvas element is not mounted")]
    NoCanvas,
    #[error("2d canvas context unavailable")]
    NoCanvasContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for AnimationError {
    fn from(value: JsValue) -> Self {
        AnimationError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
