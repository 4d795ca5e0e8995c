use std::sync::Arc;

use crate::error::Result;
use crate::storage::Storage;

/// ダークモード設定（"true" / "false" で保存）
pub struct ThemePreference {
    storage: Arc<dyn Storage>,
    key: String,
    dark: bool,
}

impl ThemePreference {
    /// 読み込み。未設定・不正値はライトモード
    pub fn load(storage: Arc<dyn Storage>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let dark = storage.get_item(&key)?.as_deref() == Some("true");
        Ok(Self { storage, key, dark })
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn set_dark(&mut self, dark: bool) -> Result<()> {
        self.storage.set_item(&self.key, if dark { "true" } else { "false" })?;
        self.dark = dark;
        Ok(())
    }

    /// 切り替えて新しい値を返す
    pub fn toggle(&mut self) -> Result<bool> {
        self.set_dark(!self.dark)?;
        Ok(self.dark)
    }
}
