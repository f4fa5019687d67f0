//! タスクストアモジュール

use crate::error::StoreError;
use crate::task::Task;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSONファイルに保存されたタスク一覧
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// 新しいTaskStoreを作成
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// データファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// タスク一覧を読み込む
    ///
    /// ファイルが存在しない場合は空の一覧を返す
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("データファイルがありません: {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        debug!("{}件のタスクを読み込みました", tasks.len());
        Ok(tasks)
    }

    /// タスク一覧を保存（ファイル全体を上書き）
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        debug!("{}件のタスクを保存しました", tasks.len());
        Ok(())
    }
}

/// 直前のタスクを締めて新しいタスクを追加
///
/// 一覧が空の場合は締め処理を行わない
pub fn append_and_close(
    mut tasks: Vec<Task>,
    note: impl Into<String>,
    now: DateTime<Local>,
) -> Vec<Task> {
    if let Some(last) = tasks.last_mut() {
        last.close(now);
    }
    tasks.push(Task::open(note, now));
    tasks
}
