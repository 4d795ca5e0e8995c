use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CoreError, Result};
use crate::storage::Storage;

/// テスト用のモックStorage実装
///
/// Clone したインスタンス同士は同じデータを共有する
#[derive(Clone, Default)]
pub struct MockStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の set/remove を失敗させる（容量超過などの再現用）
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 保存されている生の値
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().ok().and_then(|items| items.get(key).cloned())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::StorageError("write rejected".to_string()));
        }
        Ok(())
    }
}

impl Storage for MockStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.lock()?.remove(key);
        Ok(())
    }
}
