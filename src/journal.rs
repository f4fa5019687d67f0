//! 作業記録ジャーナルモジュール

use crate::config::Config;
use crate::error::JournalError;
use crate::render;
use crate::store::{self, TaskStore};
use crate::sync::GitSync;
use crate::task::Task;

use chrono::{DateTime, Local};
use tracing::info;

/// ストア・ログ出力・同期をまとめたもの
pub struct Journal {
    config: Config,
    store: TaskStore,
    sync: GitSync,
}

impl Journal {
    /// 新しいJournalを作成
    pub fn new(config: Config) -> Self {
        let store = TaskStore::new(config.data_file.clone());
        let sync = GitSync::new(config.git_program.clone(), config.data_dir.clone());

        Self {
            config,
            store,
            sync,
        }
    }

    /// 新しいタスクを記録し、Markdownログを再生成する
    ///
    /// 直前のタスクはこの時点で作業時間が確定する
    pub fn log(&self, note: &str, now: DateTime<Local>) -> Result<Vec<Task>, JournalError> {
        let tasks = self.store.load()?;
        let tasks = store::append_and_close(tasks, note, now);

        self.store.save(&tasks)?;
        render::write(&self.config.log_file, &tasks)?;

        info!(
            "タスクを記録しました: {} ({})",
            note,
            self.store.path().display()
        );
        Ok(tasks)
    }

    /// 記録済みのタスク一覧
    pub fn list(&self) -> Result<Vec<Task>, JournalError> {
        Ok(self.store.load()?)
    }

    /// リモートから取り込む
    pub fn pull(&self) -> Result<(), JournalError> {
        self.sync.pull()?;
        Ok(())
    }

    /// リモートへ送る
    pub fn push(&self, now: DateTime<Local>) -> Result<(), JournalError> {
        self.sync.push(now)?;
        Ok(())
    }
}
