pub mod types;
pub mod storage;
pub mod clock;
pub mod render;
pub mod guestbook;
pub mod wishes;
pub mod theme;
pub mod error;

use std::sync::Arc;

pub use error::{ClearError, CoreError, EditError, Result, ValidationError};

use crate::clock::Clock;
use crate::guestbook::GuestbookStore;
use crate::storage::Storage;
use crate::theme::ThemePreference;
use crate::types::StorageKeys;
use crate::wishes::WishStore;

/// PageCore: UIから使用されるメインAPI
///
/// セッション開始時に一度だけ生成し、各ストアを保持する
pub struct PageCore {
    pub guestbook: GuestbookStore,
    pub wishes: WishStore,
    pub theme: ThemePreference,
}

impl PageCore {
    /// 初期化（Storageの読み込みまで行う）
    pub fn init(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>, keys: &StorageKeys) -> Result<Self> {
        let guestbook = GuestbookStore::new(storage.clone(), clock.clone(), keys.messages.as_str());
        let wishes = WishStore::load(storage.clone(), clock, keys.wishes.as_str())?;
        let theme = ThemePreference::load(storage, keys.dark_mode.as_str())?;

        log::info!("PageCore initialized");
        Ok(Self {
            guestbook,
            wishes,
            theme,
        })
    }

    /// ブラウザのlocalStorageとローカル時刻で初期化
    pub fn init_browser() -> Result<Self> {
        let storage = Arc::new(storage::local::LocalStorage::open()?);
        Self::init(storage, Arc::new(clock::SystemClock), &StorageKeys::default())
    }
}
