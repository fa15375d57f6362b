use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LikeError {
    #[error("no root element to listen on (document has no body)")]
    MissingRoot,

    #[error("already listening for likes on this element")]
    AlreadyRegistered,

    #[error("invalid like config: {0}")]
    InvalidConfig(String),

    #[error("unable to parse like config")]
    ConfigParse(#[from] serde_json::Error),

    #[error("dom error: {0}")]
    Dom(String),
}

impl From<JsValue> for LikeError {
    fn from(value: JsValue) -> Self {
        Self::Dom(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<LikeError> for JsValue {
    fn from(value: LikeError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}
