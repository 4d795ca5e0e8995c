use crate::error::{CoreError, Result};
use crate::storage::Storage;

/// window.localStorage 実装
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// window.localStorage を取得
    ///
    /// プライベートモード等で利用できない場合はエラー
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| CoreError::Other("No window".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| CoreError::StorageError("localStorage is not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl Storage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.storage.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // QuotaExceededError はここで JsError になる
        self.storage.set_item(key, value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key)?;
        Ok(())
    }
}
