use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),
    #[error("selector `{0}` matched no elements")]
    EmptySelection(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DemoError {
    fn from(value: JsValue) -> Self {
        DemoError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
