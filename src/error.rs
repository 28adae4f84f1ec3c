//! Crate-wide error type.
//!
//! Almost nothing here is ever shown to a shopper: page behaviors degrade
//! silently. Errors exist so start-up code can use `?` and so the exported
//! functions hand something readable back to JS.

use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum ShopError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    /// `localStorage` missing, blocked or over quota.
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// A DOM call threw.
    #[error("dom error: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ShopError {
    /// Wrap a thrown JS value, keeping its string form when it has one.
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(js_message(&err))
    }

    pub fn storage(err: JsValue) -> Self {
        Self::Storage(js_message(&err))
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl From<ShopError> for JsValue {
    fn from(err: ShopError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = ShopError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_carry_the_parser_message() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ShopError = parse.into();
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn storage_message_is_kept() {
        let err = ShopError::Storage("quota".into());
        assert_eq!(err.to_string(), "storage unavailable: quota");
    }
}
