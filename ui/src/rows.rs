use kitty_core::render::{ItemHandle, ListRenderer, PlaceholderMode};
use kitty_core::types::{Message, Wish};

/// 表示用の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// プレースホルダーは None（操作ボタンを出さない）
    pub handle: Option<ItemHandle>,
    pub title: String,
    pub body: String,
    pub time: String,
}

impl ListRow {
    fn placeholder(title: &str, text: &str) -> Self {
        Self {
            handle: None,
            title: title.to_string(),
            body: text.to_string(),
            time: String::new(),
        }
    }
}

pub struct MessageRows;

impl ListRenderer<Message> for MessageRows {
    type Fragment = ListRow;

    fn render_item(&self, handle: ItemHandle, item: &Message) -> ListRow {
        ListRow {
            handle: Some(handle),
            title: format!("🐱 {}", item.username),
            body: item.content.clone(),
            time: item.time.clone(),
        }
    }

    /// 固定の挨拶。メッセージの有無に関係なく先頭に出す
    fn render_placeholder(&self) -> Option<ListRow> {
        Some(ListRow::placeholder("🐱 Kitty", "来てくれてありがとう！気軽にメッセージを残してね 💕"))
    }

    fn placeholder_mode(&self) -> PlaceholderMode {
        PlaceholderMode::Pinned
    }
}

pub struct WishRows;

impl ListRenderer<Wish> for WishRows {
    type Fragment = ListRow;

    fn render_item(&self, handle: ItemHandle, item: &Wish) -> ListRow {
        ListRow {
            handle: Some(handle),
            title: String::new(),
            body: item.content.clone(),
            time: item.time.clone(),
        }
    }

    fn render_placeholder(&self) -> Option<ListRow> {
        Some(ListRow::placeholder("", "お願いごとはまだありません。最初のお願いを書いてね ✨"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitty_core::render::{render_list, Snapshot};

    fn message(content: &str) -> Message {
        Message {
            username: "tama".to_string(),
            content: content.to_string(),
            time: "2024-01-01 00:00".to_string(),
        }
    }

    fn wish(content: &str) -> Wish {
        Wish {
            content: content.to_string(),
            time: "2024-01-01 00:00".to_string(),
        }
    }

    #[test]
    fn test_message_rows() {
        let messages = vec![message("nya")];
        let rendered = render_list(&Snapshot::new(&messages, 0), &MessageRows);

        assert_eq!(rendered.items.len(), 1);
        assert_eq!(rendered.items[0].title, "🐱 tama");
        assert_eq!(rendered.items[0].handle, Some(ItemHandle { index: 0, revision: 0 }));
    }

    #[test]
    fn test_guestbook_greeting_stays_with_messages() {
        let messages = vec![message("b"), message("a")];
        let rendered = render_list(&Snapshot::new(&messages, 0), &MessageRows);

        let rows: Vec<&ListRow> = rendered.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].handle, None);
        assert_eq!(rows[0].title, "🐱 Kitty");
        assert_eq!(rows[1].body, "b");
        assert_eq!(rows[2].body, "a");

        let empty: Vec<Message> = Vec::new();
        let rendered = render_list(&Snapshot::new(&empty, 0), &MessageRows);
        assert_eq!(rendered.rows().count(), 1);
    }

    #[test]
    fn test_wish_tip_only_when_empty() {
        let empty: Vec<Wish> = Vec::new();
        let rendered = render_list(&Snapshot::new(&empty, 0), &WishRows);
        assert!(rendered.placeholder.is_some());

        let wishes = vec![wish("yarn")];
        let rendered = render_list(&Snapshot::new(&wishes, 1), &WishRows);
        assert_eq!(rendered.placeholder, None);
        assert!(rendered.rows().all(|row| row.handle.is_some()));
    }
}
