//! 端末向けの色付け

use crate::task::Task;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// サマリー行を色付けして返す
///
/// 開始時刻は赤、メモ中の最後の括弧部分は黄色。
/// `enabled`が偽の場合は`Task::summary`と同じ文字列を返す。
pub fn paint(task: &Task, enabled: bool) -> String {
    if !enabled {
        return task.summary();
    }

    format!(
        "{RED}({}){RESET} {} [{}m]",
        task.start_time(),
        paint_parenthesized(&task.note),
        task.minutes()
    )
}

/// 最後の`(`から最後の`)`までを黄色にする
fn paint_parenthesized(note: &str) -> String {
    match (note.rfind('('), note.rfind(')')) {
        (Some(start), Some(stop)) if start < stop => format!(
            "{}{YELLOW}{}{RESET}{}",
            &note[..start],
            &note[start..=stop],
            &note[stop + 1..]
        ),
        _ => note.to_string(),
    }
}
