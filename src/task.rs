//! タスクレコードモジュール

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// 開始時刻の表示形式（例: 3:04pm）
pub const TIME_FORMAT: &str = "%-I:%M%P";

/// 作業記録1件
///
/// JSON上の`duration`はナノ秒の整数。最後に追加されたタスクは
/// 次のタスクが追加されるまで`duration`が確定しない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub note: String,
    pub started: DateTime<Local>,
    #[serde(with = "nanoseconds")]
    pub duration: Duration,
}

impl Task {
    /// 未確定のタスクを作成
    pub fn open(note: impl Into<String>, started: DateTime<Local>) -> Self {
        Self {
            note: note.into(),
            started,
            duration: Duration::zero(),
        }
    }

    /// 経過時間を確定する
    pub fn close(&mut self, now: DateTime<Local>) {
        self.duration = now - self.started;
    }

    /// 作業時間（分、切り捨て）
    pub fn minutes(&self) -> i64 {
        self.duration.num_minutes()
    }

    /// 開始時刻を表示形式で取得
    pub fn start_time(&self) -> String {
        self.started.format(TIME_FORMAT).to_string()
    }

    /// 一覧表示用の1行サマリー
    ///
    /// 形式: (3:04pm) メモ [30m]
    pub fn summary(&self) -> String {
        format!("({}) {} [{}m]", self.start_time(), self.note, self.minutes())
    }
}

/// `Duration`をナノ秒の整数として直列化
mod nanoseconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = duration.num_nanoseconds().unwrap_or(if *duration < Duration::zero() {
            i64::MIN
        } else {
            i64::MAX
        });
        serializer.serialize_i64(nanos)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let nanos = i64::deserialize(deserializer)?;
        Ok(Duration::nanoseconds(nanos))
    }
}
