use thiserror::Error;
use wasm_bindgen::JsValue;

/// ストレージ層・ブラウザ層のエラー
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JavaScript error: {0}")]
    JsError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("{0}")]
    Other(String),
}

impl From<JsValue> for CoreError {
    fn from(value: JsValue) -> Self {
        if let Some(s) = value.as_string() {
            CoreError::JsError(s)
        } else {
            CoreError::JsError(format!("{:?}", value))
        }
    }
}

impl From<CoreError> for JsValue {
    fn from(error: CoreError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(error: serde_json::Error) -> Self {
        CoreError::ParseError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// 入力検証エラー（add系）
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("required text is empty")]
    Empty,

    #[error(transparent)]
    Storage(#[from] CoreError),
}

/// 編集・削除のエラー
#[derive(Error, Debug)]
pub enum EditError {
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("new content is empty")]
    Empty,

    /// 描画後にリストが変更され、ハンドルが古くなった
    #[error("list changed since it was rendered")]
    StaleHandle,

    #[error(transparent)]
    Storage(#[from] CoreError),
}

/// 全削除のエラー
#[derive(Error, Debug)]
pub enum ClearError {
    #[error("nothing to clear")]
    EmptyCollection,

    #[error(transparent)]
    Storage(#[from] CoreError),
}
