pub mod local;
pub mod mock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Storage抽象trait
///
/// 文字列キー/文字列値の同期KVS（ブラウザのlocalStorage相当）
/// WASM環境ではシングルスレッドのため、Send + Sync要件なし
pub trait Storage {
    /// 値を取得（存在しなければ None）
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// 値を保存（上書き）
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// キーを削除（存在しなくても Ok）
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// JSON配列として保存されたリストを読み込む
///
/// キーが無い場合、もしくはパースできない場合は空リストとして扱う
pub fn load_list<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Result<Vec<T>> {
    let Some(json) = storage.get_item(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&json) {
        Ok(items) => Ok(items),
        Err(e) => {
            // 壊れたデータは空扱い（次の書き込みで上書きされる）
            log::warn!("Discarding unparseable value under '{}': {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// リスト全体をJSON配列として1回で書き込む
pub fn save_list<T: Serialize>(storage: &dyn Storage, key: &str, items: &[T]) -> Result<()> {
    let json = serde_json::to_string(items)?;
    storage.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::mock::MockStorage;
    use crate::types::Wish;

    #[test]
    fn test_load_missing_key_is_empty() {
        let storage = MockStorage::new();
        let wishes: Vec<Wish> = load_list(&storage, "kittyWishes").unwrap();
        assert!(wishes.is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let storage = MockStorage::new();
        storage.set_item("kittyWishes", "{not json").unwrap();
        let wishes: Vec<Wish> = load_list(&storage, "kittyWishes").unwrap();
        assert!(wishes.is_empty());

        // 値は残ったまま（読み込みで消さない）
        assert_eq!(storage.raw("kittyWishes").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_save_then_load() {
        let storage = MockStorage::new();
        let wishes = vec![
            Wish { content: "b".to_string(), time: "2024-01-01 10:00".to_string() },
            Wish { content: "a".to_string(), time: "2024-01-01 09:00".to_string() },
        ];
        save_list(&storage, "kittyWishes", &wishes).unwrap();

        let loaded: Vec<Wish> = load_list(&storage, "kittyWishes").unwrap();
        assert_eq!(loaded, wishes);
    }
}
