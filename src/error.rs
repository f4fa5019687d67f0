//! エラー型定義モジュール

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("ディレクトリ作成エラー: {0}")]
    DirectoryCreationError(io::Error),

    #[error("無効な設定値: {0}")]
    InvalidValue(String),
}

/// タスクストアエラー
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON変換エラー: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// ログ出力エラー
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("ログファイル書き込み失敗: {0}")]
    IoError(#[from] io::Error),
}

/// 同期エラー
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("コマンド起動失敗 ({program}): {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{step}が失敗しました ({status}): {stderr}")]
    CommandFailed {
        step: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// ジャーナルエラー
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("ストアエラー: {0}")]
    StoreError(#[from] StoreError),

    #[error("ログ出力エラー: {0}")]
    RenderError(#[from] RenderError),

    #[error("同期エラー: {0}")]
    SyncError(#[from] SyncError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DirectoryCreationError(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert!(err.to_string().contains("ディレクトリ作成エラー"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue("data_file is empty".to_string());
        assert!(err.to_string().contains("無効な設定値"));
        assert!(err.to_string().contains("data_file"));
    }

    #[test]
    fn test_store_error_display() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(err.to_string().contains("JSON変換エラー"));
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert!(err.to_string().contains("ログファイル書き込み失敗"));
    }

    #[test]
    fn test_sync_launch_error_display() {
        let err = SyncError::LaunchFailed {
            program: "git".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("コマンド起動失敗"));
        assert!(err.to_string().contains("git"));
    }

    #[test]
    fn test_journal_error_wraps_store_error() {
        let err = JournalError::from(StoreError::IoError(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "permission denied",
        )));
        assert!(err.to_string().contains("ストアエラー"));
    }
}
