//! 設定モジュール

use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// データディレクトリを上書きする環境変数
pub const DIR_ENV: &str = "TASK_DIR";

const DEFAULT_DIR_NAME: &str = ".tasks";
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_LOG_FILE: &str = "readme.md";
const CONFIG_FILE: &str = "config.toml";

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Config {
    /// データディレクトリ（gitリポジトリ）
    pub data_dir: PathBuf,
    /// タスク一覧のJSONファイルパス
    pub data_file: PathBuf,
    /// Markdownログのファイルパス
    pub log_file: PathBuf,
    /// 同期に使うgitコマンド
    pub git_program: String,
    /// 一覧表示を色付けするか
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_data_dir(home.join(DEFAULT_DIR_NAME))
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    data_file: Option<String>,
    log_file: Option<String>,
    git_program: Option<String>,
    color: Option<bool>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub dir: Option<PathBuf>,
    pub no_color: bool,
}

impl Config {
    /// 指定ディレクトリを基準にした既定の設定
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_file: data_dir.join(DEFAULT_DATA_FILE),
            log_file: data_dir.join(DEFAULT_LOG_FILE),
            data_dir,
            git_program: "git".to_string(),
            color: true,
        }
    }

    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 環境変数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let env_dir = env::var_os(DIR_ENV).map(PathBuf::from);
        let mut config = match resolve_data_dir(cli_args.dir.clone(), env_dir) {
            Some(dir) => Config::with_data_dir(dir),
            None => Config::default(),
        };

        // 設定ファイルはデータディレクトリ内にある
        let config_path = config.config_file_path();
        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            config.merge_file_config(&file_config);
        }

        config.merge_cli_args(cli_args);
        config.validate()?;
        config.ensure_directories()?;

        Ok(config)
    }

    /// 設定ファイルのパスを取得
    fn config_file_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// ファイル設定をマージ
    ///
    /// 相対パスはデータディレクトリからの相対として扱う
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(ref name) = file_config.data_file {
            self.data_file = self.data_dir.join(name);
        }
        if let Some(ref name) = file_config.log_file {
            self.log_file = self.data_dir.join(name);
        }
        if let Some(ref program) = file_config.git_program {
            self.git_program = program.clone();
        }
        if let Some(color) = file_config.color {
            self.color = color;
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if cli_args.no_color {
            self.color = false;
        }
    }

    /// 設定値をバリデート
    fn validate(&self) -> Result<(), ConfigError> {
        if is_missing_file_name(&self.data_file, &self.data_dir) {
            return Err(ConfigError::InvalidValue(
                "data_file must name a file".to_string(),
            ));
        }
        if is_missing_file_name(&self.log_file, &self.data_dir) {
            return Err(ConfigError::InvalidValue(
                "log_file must name a file".to_string(),
            ));
        }
        if self.data_file == self.log_file {
            return Err(ConfigError::InvalidValue(
                "data_file and log_file must differ".to_string(),
            ));
        }
        if self.git_program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "git_program must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// 必要なディレクトリを作成
    fn ensure_directories(&self) -> Result<(), ConfigError> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(ConfigError::DirectoryCreationError)?;
        }

        for file in [&self.data_file, &self.log_file] {
            if let Some(parent) = file.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).map_err(ConfigError::DirectoryCreationError)?;
                }
            }
        }

        Ok(())
    }
}

/// データディレクトリを決定（CLI引数 > 環境変数）
///
/// どちらも無い場合はNoneを返し、デフォルトを使う
fn resolve_data_dir(cli_dir: Option<PathBuf>, env_dir: Option<PathBuf>) -> Option<PathBuf> {
    cli_dir
        .or(env_dir)
        .filter(|dir| !dir.as_os_str().is_empty())
}

/// ファイル名が空（ディレクトリ自身を指している）か
fn is_missing_file_name(file: &Path, data_dir: &Path) -> bool {
    file == data_dir || file.file_name().is_none()
}
