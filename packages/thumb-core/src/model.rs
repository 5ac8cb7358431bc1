use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::{Limits, validate_batch};

/// アップロードされた1ファイル
///
/// マルチパートのフィールドから生成され、以後は変更されない。
#[derive(Debug, Clone)]
pub struct UploadItem {
    original_name: String,
    mime_type: String,
    raw_bytes: Bytes,
}

impl UploadItem {
    pub fn new(original_name: impl Into<String>, mime_type: impl Into<String>, raw_bytes: Bytes) -> Self {
        Self {
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            raw_bytes,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn raw_bytes(&self) -> &Bytes {
        &self.raw_bytes
    }

    pub fn byte_len(&self) -> u64 {
        self.raw_bytes.len() as u64
    }
}

/// 1回の処理リクエスト
///
/// `new` 以外では生成できないため、保持している時点で
/// クエリが空でなく画像数が上限内であることが保証される。
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    query: String,
    items: Vec<UploadItem>,
}

impl ProcessRequest {
    pub fn new(
        query: Option<String>,
        items: Vec<UploadItem>,
        limits: &Limits,
    ) -> Result<Self, ValidationError> {
        validate_batch(query.as_deref(), items.len(), limits)?;

        Ok(Self {
            // validate_batch が None を弾いている
            query: query.unwrap_or_default(),
            items,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[UploadItem] {
        &self.items
    }

    pub fn into_parts(self) -> (String, Vec<UploadItem>) {
        (self.query, self.items)
    }
}

/// 変換に成功した1画像の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub filename: String,
    #[serde(rename = "response")]
    pub description: String,
    #[serde(rename = "size")]
    pub byte_size: u64,
}

impl ProcessedResult {
    /// `position` は 0 始まりの入力順。説明文には 1 始まりで埋め込む
    pub fn new(filename: impl Into<String>, query: &str, position: usize, byte_size: u64) -> Self {
        Self {
            filename: filename.into(),
            description: describe(query, position),
            byte_size,
        }
    }
}

/// 結果の説明文を生成する
pub fn describe(query: &str, position: usize) -> String {
    format!("Processed Image {}: {}", position + 1, query)
}

/// 個別アイテムの失敗情報（ログ用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemError {
    pub filename: String,
    pub reason: String,
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.filename, self.reason)
    }
}

/// API レスポンスボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProcessResponse {
    Completed {
        #[serde(rename = "processedImages")]
        processed_images: Vec<ProcessedResult>,
    },
    Failed {
        error: String,
    },
}
