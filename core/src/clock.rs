use chrono::{Local, NaiveDateTime};

use crate::types::TIME_FORMAT;

/// 現在時刻の取得元
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// 表示用フォーマット済みの現在時刻
    fn timestamp(&self) -> String {
        self.now().format(TIME_FORMAT).to_string()
    }
}

/// ブラウザ/OSのローカル時刻
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// テスト用の固定時刻
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
