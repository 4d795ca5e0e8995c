//! フォーム送信・ボタン操作からストア呼び出しまでの流れ
//!
//! egui に依存しないので、ネイティブのユニットテストで確認できる。
//! 確認ダイアログ・入力ダイアログの結果は引数として受け取り、
//! キャンセル時はストアを呼ばない。

use kitty_core::guestbook::GuestbookStore;
use kitty_core::render::ItemHandle;
use kitty_core::wishes::WishStore;
use kitty_core::{ClearError, CoreError, EditError, ValidationError};

pub const GUESTBOOK_EMPTY: &str = "名前とメッセージを入力してね";
pub const GUESTBOOK_THANKS: &str = "メッセージありがとう！🐾";
pub const WISH_EMPTY: &str = "お願いごとを入力してね";
pub const WISH_ADDED: &str = "お願いごとを追加しました ✨";
pub const WISH_UPDATED: &str = "お願いごとを更新しました";
pub const WISH_DELETED: &str = "お願いごとを削除しました";
pub const WISHES_CLEARED: &str = "すべてのお願いごとを削除しました";
pub const NOTHING_TO_CLEAR: &str = "削除するお願いごとはありません";
pub const LIST_CHANGED: &str = "リストが更新されました。もう一度操作してください";

/// 画面に表示する通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Info(s) | Notice::Warning(s) | Notice::Error(s) => s,
        }
    }
}

/// ゲストブックの入力フォーム
#[derive(Debug, Default)]
pub struct GuestbookForm {
    pub username: String,
    pub content: String,
}

/// ウィッシュの入力フォーム
#[derive(Debug, Default)]
pub struct WishForm {
    pub content: String,
}

impl WishForm {
    /// 文字数カウンター
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// 全削除ボタンを押したときの分岐
#[derive(Debug, PartialEq, Eq)]
pub enum ClearRequest {
    /// 空なので確認せずに通知だけ出す
    NothingToClear(Notice),
    /// 確認ダイアログを出す
    NeedsConfirmation,
}

/// ゲストブック送信。成功したらフォームを空にする
pub fn submit_guestbook(store: &GuestbookStore, form: &mut GuestbookForm) -> Notice {
    match store.add(&form.username, &form.content) {
        Ok(message) => {
            log::info!("Guestbook message from {}", message.username);
            form.username.clear();
            form.content.clear();
            Notice::Success(GUESTBOOK_THANKS.to_string())
        }
        Err(ValidationError::Empty) => Notice::Warning(GUESTBOOK_EMPTY.to_string()),
        Err(ValidationError::Storage(e)) => storage_failed(e),
    }
}

/// ウィッシュ追加。成功したら入力欄（と文字数）をリセット
pub fn submit_wish(store: &mut WishStore, form: &mut WishForm) -> Notice {
    match store.add(&form.content) {
        Ok(_) => {
            form.content.clear();
            Notice::Success(WISH_ADDED.to_string())
        }
        Err(ValidationError::Empty) => Notice::Warning(WISH_EMPTY.to_string()),
        Err(ValidationError::Storage(e)) => storage_failed(e),
    }
}

/// 編集ダイアログの結果を反映。`None`（キャンセル）なら何もしない
pub fn edit_wish(store: &mut WishStore, handle: ItemHandle, input: Option<&str>) -> Option<Notice> {
    let input = input?;
    let result = store
        .resolve(handle)
        .and_then(|index| store.edit(index, input));

    Some(match result {
        Ok(_) => Notice::Success(WISH_UPDATED.to_string()),
        Err(EditError::Empty) => Notice::Warning(WISH_EMPTY.to_string()),
        Err(e) => edit_failed(e),
    })
}

/// 削除確認の結果を反映
pub fn delete_wish(store: &mut WishStore, handle: ItemHandle, confirmed: bool) -> Option<Notice> {
    if !confirmed {
        return None;
    }

    let result = store
        .resolve(handle)
        .and_then(|index| store.delete(index));

    Some(match result {
        Ok(_) => Notice::Info(WISH_DELETED.to_string()),
        Err(e) => edit_failed(e),
    })
}

/// 見出しに出す件数
pub fn wish_count(store: &WishStore) -> usize {
    store.snapshot().len()
}

/// 全削除ボタン
pub fn request_clear(store: &WishStore) -> ClearRequest {
    if store.is_empty() {
        ClearRequest::NothingToClear(Notice::Info(NOTHING_TO_CLEAR.to_string()))
    } else {
        ClearRequest::NeedsConfirmation
    }
}

/// 全削除確認の結果を反映
pub fn clear_wishes(store: &mut WishStore, confirmed: bool) -> Option<Notice> {
    if !confirmed {
        return None;
    }

    Some(match store.clear_all() {
        Ok(()) => Notice::Info(WISHES_CLEARED.to_string()),
        Err(ClearError::EmptyCollection) => Notice::Info(NOTHING_TO_CLEAR.to_string()),
        Err(ClearError::Storage(e)) => storage_failed(e),
    })
}

fn edit_failed(error: EditError) -> Notice {
    match error {
        EditError::StaleHandle | EditError::IndexOutOfRange { .. } => {
            Notice::Warning(LIST_CHANGED.to_string())
        }
        EditError::Empty => Notice::Warning(WISH_EMPTY.to_string()),
        EditError::Storage(e) => storage_failed(e),
    }
}

fn storage_failed(error: CoreError) -> Notice {
    log::error!("Failed to save: {:?}", error);
    Notice::Error(format!("保存に失敗しました: {}", error))
}
