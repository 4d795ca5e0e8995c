//! リスト描画の共通契約
//!
//! 描画した行には `ItemHandle`（位置 + リビジョン）を紐付ける。
//! ストアが変更されるとリビジョンが進むため、古い描画結果のハンドルで
//! 別の要素を操作してしまうことはない。

/// 描画済みの行に紐付くハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle {
    pub index: usize,
    pub revision: u64,
}

/// ある時点のリストの読み取り専用ビュー
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    items: &'a [T],
    revision: u64,
}

impl<'a, T> Snapshot<'a, T> {
    pub fn new(items: &'a [T], revision: u64) -> Self {
        Self { items, revision }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 表示順（新しい順）にハンドルと要素を返す
    pub fn iter(&self) -> impl Iterator<Item = (ItemHandle, &'a T)> {
        let items = self.items;
        let revision = self.revision;
        items
            .iter()
            .enumerate()
            .map(move |(index, item)| (ItemHandle { index, revision }, item))
    }
}

/// プレースホルダーの出し方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderMode {
    /// 常に先頭に表示（固定の挨拶など）
    Pinned,
    /// リストが空のときだけ表示
    WhenEmpty,
}

/// 1要素を表示用フラグメントに変換する
pub trait ListRenderer<T> {
    type Fragment;

    fn render_item(&self, handle: ItemHandle, item: &T) -> Self::Fragment;

    /// 永続化データに含まれないプレースホルダー
    fn render_placeholder(&self) -> Option<Self::Fragment> {
        None
    }

    fn placeholder_mode(&self) -> PlaceholderMode {
        PlaceholderMode::WhenEmpty
    }
}

/// 描画結果
///
/// `placeholder` はモードに従って解決済み（表示すべきときだけ Some）
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedList<F> {
    pub placeholder: Option<F>,
    pub items: Vec<F>,
}

impl<F> RenderedList<F> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 表示順（プレースホルダー → 要素）
    pub fn rows(&self) -> impl Iterator<Item = &F> {
        self.placeholder.iter().chain(self.items.iter())
    }
}

/// スナップショット全体を描画
pub fn render_list<T, R>(snapshot: &Snapshot<'_, T>, renderer: &R) -> RenderedList<R::Fragment>
where
    R: ListRenderer<T>,
{
    let show_placeholder = match renderer.placeholder_mode() {
        PlaceholderMode::Pinned => true,
        PlaceholderMode::WhenEmpty => snapshot.is_empty(),
    };

    RenderedList {
        placeholder: if show_placeholder {
            renderer.render_placeholder()
        } else {
            None
        },
        items: snapshot
            .iter()
            .map(|(handle, item)| renderer.render_item(handle, item))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl ListRenderer<&str> for Upper {
        type Fragment = String;

        fn render_item(&self, handle: ItemHandle, item: &&str) -> String {
            format!("{}:{}", handle.index, item.to_uppercase())
        }

        fn render_placeholder(&self) -> Option<String> {
            Some("(empty)".to_string())
        }
    }

    struct Greeting;

    impl ListRenderer<&str> for Greeting {
        type Fragment = String;

        fn render_item(&self, _handle: ItemHandle, item: &&str) -> String {
            item.to_string()
        }

        fn render_placeholder(&self) -> Option<String> {
            Some("welcome".to_string())
        }

        fn placeholder_mode(&self) -> PlaceholderMode {
            PlaceholderMode::Pinned
        }
    }

    #[test]
    fn test_render_keeps_order() {
        let items = ["b", "a"];
        let rendered = render_list(&Snapshot::new(&items, 3), &Upper);

        assert_eq!(rendered.items, vec!["0:B".to_string(), "1:A".to_string()]);
        // 要素があれば空表示は出さない
        assert_eq!(rendered.placeholder, None);
    }

    #[test]
    fn test_pinned_placeholder_stays_first() {
        let items = ["b", "a"];
        let rendered = render_list(&Snapshot::new(&items, 0), &Greeting);

        let rows: Vec<&str> = rendered.rows().map(String::as_str).collect();
        assert_eq!(rows, vec!["welcome", "b", "a"]);

        let empty: [&str; 0] = [];
        let rendered = render_list(&Snapshot::new(&empty, 0), &Greeting);
        assert_eq!(rendered.rows().count(), 1);
    }

    #[test]
    fn test_render_empty() {
        let items: [&str; 0] = [];
        let rendered = render_list(&Snapshot::new(&items, 0), &Upper);

        assert!(rendered.is_empty());
        assert!(rendered.placeholder.is_some());
    }

    #[test]
    fn test_handles_carry_revision() {
        let items = ["x", "y"];
        let snapshot = Snapshot::new(&items, 7);
        let handles: Vec<_> = snapshot.iter().map(|(h, _)| h).collect();

        assert_eq!(
            handles,
            vec![
                ItemHandle { index: 0, revision: 7 },
                ItemHandle { index: 1, revision: 7 },
            ]
        );
    }
}
