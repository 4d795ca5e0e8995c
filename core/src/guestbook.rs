use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{Result, ValidationError};
use crate::storage::{load_list, save_list, Storage};
use crate::types::{non_empty, Message};

/// ゲストブック
///
/// メモリ上にキャッシュを持たず、読み込みのたびにStorageからパースする
pub struct GuestbookStore {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    key: String,
}

impl GuestbookStore {
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>, key: impl Into<String>) -> Self {
        Self {
            storage,
            clock,
            key: key.into(),
        }
    }

    /// メッセージ一覧（新しい順）
    pub fn list(&self) -> Result<Vec<Message>> {
        load_list(self.storage.as_ref(), &self.key)
    }

    /// メッセージを追加
    ///
    /// 名前・本文のどちらかが空白のみなら何も書き込まずにエラー
    pub fn add(&self, username: &str, content: &str) -> std::result::Result<Message, ValidationError> {
        let (Some(username), Some(content)) = (non_empty(username), non_empty(content)) else {
            return Err(ValidationError::Empty);
        };

        let message = Message {
            username,
            content,
            time: self.clock.timestamp(),
        };

        let mut messages = self.list()?;
        messages.insert(0, message.clone());
        save_list(self.storage.as_ref(), &self.key, &messages)?;

        log::debug!("Guestbook: {} messages", messages.len());
        Ok(message)
    }
}
