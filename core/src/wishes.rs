use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{ClearError, EditError, Result, ValidationError};
use crate::render::{ItemHandle, Snapshot};
use crate::storage::{load_list, save_list, Storage};
use crate::types::{non_empty, Wish};

/// ウィッシュリスト
///
/// 起動時に一度だけStorageから読み込み、以降はメモリ上のリストを正とする。
/// 変更はすべてリスト全体の書き込みが成功してからメモリに反映する
/// （書き込み失敗時はメモリもStorageも変更前のまま）。
pub struct WishStore {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    key: String,
    wishes: Vec<Wish>,
    revision: u64,
}

impl WishStore {
    /// Storageから読み込んで初期化
    pub fn load(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let wishes = load_list(storage.as_ref(), &key)?;
        log::info!("Loaded {} wishes from '{}'", wishes.len(), key);

        Ok(Self {
            storage,
            clock,
            key,
            wishes,
            revision: 0,
        })
    }

    /// 現在のリスト（新しい順）
    pub fn list(&self) -> &[Wish] {
        &self.wishes
    }

    pub fn snapshot(&self) -> Snapshot<'_, Wish> {
        Snapshot::new(&self.wishes, self.revision)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    /// 描画時のハンドルを現在の位置に解決
    pub fn resolve(&self, handle: ItemHandle) -> std::result::Result<usize, EditError> {
        if handle.revision != self.revision {
            return Err(EditError::StaleHandle);
        }
        self.check_index(handle.index)?;
        Ok(handle.index)
    }

    /// 追加（先頭に挿入）
    pub fn add(&mut self, content: &str) -> std::result::Result<Wish, ValidationError> {
        let content = non_empty(content).ok_or(ValidationError::Empty)?;
        let wish = Wish {
            content,
            time: self.clock.timestamp(),
        };

        let mut wishes = self.wishes.clone();
        wishes.insert(0, wish.clone());
        self.commit(wishes)?;

        Ok(wish)
    }

    /// 内容のみ置き換え（時刻はそのまま）
    pub fn edit(&mut self, index: usize, new_content: &str) -> std::result::Result<Wish, EditError> {
        self.check_index(index)?;
        let content = non_empty(new_content).ok_or(EditError::Empty)?;

        let mut wishes = self.wishes.clone();
        wishes[index].content = content;
        let updated = wishes[index].clone();
        self.commit(wishes)?;

        Ok(updated)
    }

    /// 1件削除。確認は呼び出し側で済ませておくこと
    pub fn delete(&mut self, index: usize) -> std::result::Result<Wish, EditError> {
        self.check_index(index)?;

        let mut wishes = self.wishes.clone();
        let removed = wishes.remove(index);
        self.commit(wishes)?;

        Ok(removed)
    }

    /// 全削除。空の場合は EmptyCollection
    ///
    /// 空配列を書き込むのではなくキー自体を削除する
    pub fn clear_all(&mut self) -> std::result::Result<(), ClearError> {
        if self.wishes.is_empty() {
            return Err(ClearError::EmptyCollection);
        }

        self.storage.remove_item(&self.key)?;
        let cleared = self.wishes.len();
        self.wishes.clear();
        self.revision += 1;

        log::info!("Cleared {} wishes", cleared);
        Ok(())
    }

    fn check_index(&self, index: usize) -> std::result::Result<(), EditError> {
        if index >= self.wishes.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.wishes.len(),
            });
        }
        Ok(())
    }

    /// 書き込みに成功した場合のみメモリに反映
    fn commit(&mut self, wishes: Vec<Wish>) -> Result<()> {
        save_list(self.storage.as_ref(), &self.key, &wishes)?;
        self.wishes = wishes;
        self.revision += 1;
        Ok(())
    }
}
