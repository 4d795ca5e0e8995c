use serde::{Deserialize, Serialize};

/// 時刻表示フォーマット（例: 2024-05-01 09:07）
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// ゲストブックのメッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub username: String,
    pub content: String,
    pub time: String,
}

/// ウィッシュリストの項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub content: String,
    pub time: String,
}

/// ストレージキー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub messages: String,
    pub wishes: String,
    pub dark_mode: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            messages: "kittyMessages".to_string(),
            wishes: "kittyWishes".to_string(),
            dark_mode: "darkMode".to_string(),
        }
    }
}

/// 前後の空白を除去し、空なら None
pub(crate) fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
