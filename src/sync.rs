//! データディレクトリのバージョン管理同期モジュール

use crate::error::SyncError;
use crate::render::DATE_FORMAT;
use crate::task::TIME_FORMAT;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

/// gitによる同期
pub struct GitSync {
    program: String,
    repo_dir: PathBuf,
}

impl GitSync {
    /// 新しいGitSyncを作成
    pub fn new(program: impl Into<String>, repo_dir: PathBuf) -> Self {
        Self {
            program: program.into(),
            repo_dir,
        }
    }

    /// リモートから取り込む
    pub fn pull(&self) -> Result<(), SyncError> {
        self.run(&["pull"])
    }

    /// 全変更をコミットしてリモートへ送る
    ///
    /// add → commit → push の順に実行し、失敗した時点で中断する
    pub fn push(&self, now: DateTime<Local>) -> Result<(), SyncError> {
        let message = commit_message(now);
        self.run(&["add", "-A"])?;
        self.run(&["commit", "-m", &message])?;
        self.run(&["push"])
    }

    /// `<program> -C <repo_dir> <args...>` を実行
    fn run(&self, args: &[&str]) -> Result<(), SyncError> {
        let step = format!("{} {}", self.program, args.join(" "));
        info!("実行: {} ({})", step, self.repo_dir.display());

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.repo_dir)
            .args(args)
            .output()
            .map_err(|source| SyncError::LaunchFailed {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SyncError::CommandFailed {
                step,
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}

/// コミットメッセージ（例: 01-02-24 3:04pm）
fn commit_message(now: DateTime<Local>) -> String {
    now.format(&format!("{} {}", DATE_FORMAT, TIME_FORMAT))
        .to_string()
}
