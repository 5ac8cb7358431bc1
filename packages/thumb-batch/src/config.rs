//! サービス設定
//!
//! YAML ファイルと環境変数から読み込む。後のソースが前のソースを上書きする。
//!
//! 1. 組み込みのデフォルト値
//! 2. YAML 設定ファイル（デフォルト: `config.yaml`、存在しなければスキップ）
//! 3. `THUMB_BATCH_` で始まる環境変数（ネストは `__` 区切り）
//!
//! ```bash
//! THUMB_BATCH_PORT=8080
//! THUMB_BATCH_LIMITS__MAX_ITEM_BYTES=1048576
//! THUMB_BATCH_TRANSFORM__FIT=cover
//! THUMB_BATCH_REQUEST_TIMEOUT=10s
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thumb_core::{Limits, TransformParams, validate_params};

/// CLI 引数（設定ファイルの指定のみ）
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 設定ファイルのパス
    #[arg(short = 'f', long, env = "THUMB_BATCH_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// 設定を検証して終了する
    #[arg(long)]
    pub validate: bool,
}

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// バインドするホスト
    pub host: String,
    /// バインドするポート
    pub port: u16,
    /// アップロード上限
    pub limits: Limits,
    /// サムネイルの変換パラメータ
    pub transform: TransformParams,
    /// バッチ全体のタイムアウト
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            limits: Limits::default(),
            transform: TransformParams::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// 設定を読み込んで検証する
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let config: Config = Self::figment(args).extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(&args.config))
            .merge(Env::prefixed("THUMB_BATCH_").split("__").ignore(&["config"]))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_params(self.transform.width, self.transform.height, self.transform.quality)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.limits.max_items == 0 {
            return Err(ConfigError::Invalid("limits.max_items must be at least 1".to_string()));
        }
        if self.limits.max_item_bytes == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_item_bytes must be at least 1".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid("request_timeout must be non-zero".to_string()));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
