//! CLIモジュール

use crate::config::{CliArgs, Config};
use crate::highlight;
use crate::journal::Journal;
use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

/// task - 作業時間記録ツール
///
/// サブコマンド以外の引数はすべて作業メモとして記録する
#[derive(Parser, Debug)]
#[command(name = "task")]
#[command(about = "作業時間記録ツール", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// データディレクトリ（環境変数TASK_DIRより優先）
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// 一覧表示の色付けを無効化
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 作業メモ（空白区切りで連結される）
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub note: Vec<String>,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 記録済みのタスクを一覧表示
    List,
    /// データディレクトリをリモートから取り込む
    Pull,
    /// データディレクトリをコミットしてリモートへ送る
    Push,
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if needs_usage(&cli) {
        eprintln!("{}", Cli::command().render_usage());
        process::exit(1);
    }

    let cli_args = CliArgs {
        dir: cli.dir,
        no_color: cli.no_color,
    };
    let config = Config::load(&cli_args)?;
    let use_color = color_enabled(config.color);
    let journal = Journal::new(config);

    match cli.command {
        Some(Commands::List) => {
            for task in journal.list()? {
                println!("{}", highlight::paint(&task, use_color));
            }
        }
        Some(Commands::Pull) => {
            journal.pull()?;
            println!("リモートから取り込みました");
        }
        Some(Commands::Push) => {
            journal.push(Local::now())?;
            println!("リモートへ送信しました");
        }
        None => {
            let note = cli.note.join(" ");
            journal.log(&note, Local::now())?;
        }
    }

    Ok(())
}

/// サブコマンドもメモも無い場合は使い方を表示する
fn needs_usage(cli: &Cli) -> bool {
    cli.command.is_none() && cli.note.is_empty()
}

/// 色付けするか（設定・NO_COLOR・端末かどうか）
fn color_enabled(configured: bool) -> bool {
    configured && env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["task"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.note.is_empty());
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::try_parse_from(["task", "list"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
        assert!(cli.note.is_empty());
    }

    #[test]
    fn test_pull_command() {
        let cli = Cli::try_parse_from(["task", "pull"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Pull)));
    }

    #[test]
    fn test_push_command_with_dir() {
        let cli = Cli::try_parse_from(["task", "--dir", "/tmp/tasks", "push"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Push)));
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/tasks")));
    }

    #[test]
    fn test_note_words() {
        let cli = Cli::try_parse_from(["task", "write", "spec", "(draft)"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.note, vec!["write", "spec", "(draft)"]);
        assert_eq!(cli.note.join(" "), "write spec (draft)");
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::try_parse_from(["task", "--no-color", "list"]).unwrap();
        assert!(cli.no_color);
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_note_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["task", "-5", "minutes", "late"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.note.join(" "), "-5 minutes late");
    }

    #[test]
    fn test_note_starting_with_help() {
        let cli = Cli::try_parse_from(["task", "help", "me", "debug"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.note, vec!["help", "me", "debug"]);
    }

    #[test]
    fn test_flags_before_note_still_parsed() {
        let cli = Cli::try_parse_from(["task", "--no-color", "-d", "/tmp/tasks", "write"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/tasks")));
        assert_eq!(cli.note, vec!["write"]);
    }

    #[test]
    fn test_needs_usage() {
        let cli = Cli::try_parse_from(["task"]).unwrap();
        assert!(needs_usage(&cli));

        let cli = Cli::try_parse_from(["task", "--dir", "/tmp/tasks"]).unwrap();
        assert!(needs_usage(&cli));

        let cli = Cli::try_parse_from(["task", "list"]).unwrap();
        assert!(!needs_usage(&cli));

        let cli = Cli::try_parse_from(["task", "review"]).unwrap();
        assert!(!needs_usage(&cli));
    }

    #[test]
    fn test_color_disabled_by_config() {
        assert!(!color_enabled(false));
    }
}
