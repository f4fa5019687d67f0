//! 作業ログ出力モジュール

use crate::error::RenderError;
use crate::task::Task;
use std::fs;
use std::path::Path;
use tracing::info;

/// 日付見出しの形式（例: 01-02-24）
pub const DATE_FORMAT: &str = "%m-%d-%y";

const TABLE_HEADER: &str = "| start | duration | notes |\n|:-----:|:--------:|:------|\n";

/// タスク一覧を日付ごとのMarkdown表に変換
///
/// 最後の行は未確定のため、作業時間は常に`-`と表示する
pub fn render(tasks: &[Task]) -> String {
    let mut page = String::new();
    let mut prev_date = String::new();

    for (i, task) in tasks.iter().enumerate() {
        let date = task.started.format(DATE_FORMAT).to_string();
        if date != prev_date {
            page.push_str(&format!("\n## {}\n\n{}", date, TABLE_HEADER));
            prev_date = date;
        }

        let duration = if i == tasks.len() - 1 {
            "-".to_string()
        } else {
            task.minutes().to_string()
        };
        page.push_str(&format!(
            "| {} | {} | {} |\n",
            task.start_time(),
            duration,
            task.note
        ));
    }

    page
}

/// Markdownログを書き出す（ファイル全体を置き換え）
pub fn write(path: &Path, tasks: &[Task]) -> Result<(), RenderError> {
    fs::write(path, render(tasks))?;
    info!("作業ログを更新しました: {}", path.display());
    Ok(())
}
