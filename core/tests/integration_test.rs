// 統合テスト
// ストアはMockStorage + FixedClockでネイティブ実行する

use std::sync::Arc;

use chrono::NaiveDate;
use kitty_core::clock::{Clock, FixedClock};
use kitty_core::storage::mock::MockStorage;
use kitty_core::storage::Storage;
use kitty_core::types::{StorageKeys, Wish};
use kitty_core::wishes::WishStore;
use kitty_core::{ClearError, PageCore, ValidationError};

fn clock() -> Arc<dyn Clock> {
    let at = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap();
    Arc::new(FixedClock(at))
}

fn is_time_format(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 16
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            10 => *c == b' ',
            13 => *c == b':',
            _ => c.is_ascii_digit(),
        })
}

#[test]
fn test_wishes_survive_reload() {
    let storage = MockStorage::new();
    let keys = StorageKeys::default();

    let before: Vec<Wish> = {
        let mut core = PageCore::init(Arc::new(storage.clone()), clock(), &keys).unwrap();
        for c in ["yarn", "tuna", "box"] {
            core.wishes.add(c).unwrap();
        }
        core.wishes.edit(2, "red yarn").unwrap();
        core.wishes.list().to_vec()
    };

    let reloaded = PageCore::init(Arc::new(storage), clock(), &keys).unwrap();
    assert_eq!(reloaded.wishes.list(), before.as_slice());
    assert_eq!(reloaded.wishes.list()[2].content, "red yarn");
}

#[test]
fn test_guestbook_uses_messages_key() {
    let storage = MockStorage::new();
    let core = PageCore::init(Arc::new(storage.clone()), clock(), &StorageKeys::default()).unwrap();

    let message = core.guestbook.add("mimi", "nya").unwrap();
    assert!(is_time_format(&message.time));
    assert_eq!(message.time, "2024-02-29 07:30");

    let raw = storage.raw("kittyMessages").unwrap();
    assert_eq!(
        raw,
        r#"[{"username":"mimi","content":"nya","time":"2024-02-29 07:30"}]"#
    );
    assert!(!storage.contains_key("kittyWishes"));
}

#[test]
fn test_guestbook_growth_and_order() {
    let storage = MockStorage::new();
    let core = PageCore::init(Arc::new(storage), clock(), &StorageKeys::default()).unwrap();

    for i in 0..5 {
        let len = core.guestbook.list().unwrap().len();
        let added = core.guestbook.add("guest", &format!("hello {}", i)).unwrap();

        let messages = core.guestbook.list().unwrap();
        assert_eq!(messages.len(), len + 1);
        assert_eq!(messages[0], added);
    }

    assert!(matches!(core.guestbook.add("guest", "   "), Err(ValidationError::Empty)));
    assert_eq!(core.guestbook.list().unwrap().len(), 5);
}

#[test]
fn test_custom_keys() {
    let storage = MockStorage::new();
    let keys = StorageKeys {
        messages: "m".to_string(),
        wishes: "w".to_string(),
        dark_mode: "d".to_string(),
    };
    let mut core = PageCore::init(Arc::new(storage.clone()), clock(), &keys).unwrap();

    core.wishes.add("fish").unwrap();
    core.theme.set_dark(true).unwrap();

    assert!(storage.contains_key("w"));
    assert_eq!(storage.raw("d").as_deref(), Some("true"));
    assert!(!storage.contains_key("kittyWishes"));
}

#[test]
fn test_corrupt_wishes_load_as_empty() {
    let storage = MockStorage::new();
    storage.set_item("kittyWishes", "[{\"content\":1}]").unwrap();

    let mut store = WishStore::load(Arc::new(storage.clone()), clock(), "kittyWishes").unwrap();
    assert!(store.is_empty());
    assert!(matches!(store.clear_all(), Err(ClearError::EmptyCollection)));
}
