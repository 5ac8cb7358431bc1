//! マルチパートのリクエストボディを [`ProcessRequest`] に変換する
//!
//! ファイルはフィールドごとに受信しながら検証する。MIME タイプ違反・サイズ超過・
//! 枚数超過はその時点で打ち切り、変換処理には一切渡さない。

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use bytes::BytesMut;
use thumb_core::{Limits, ProcessRequest, UploadItem, ValidationError, validate_item};

/// 画像ファイルのフィールド名
pub const IMAGES_FIELD: &str = "images";

/// クエリ文字列のフィールド名
pub const QUERY_FIELD: &str = "query";

/// Content-Type が無いファイルパートの扱い
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to parse multipart data: {0}")]
    Multipart(#[from] MultipartError),
}

/// マルチパートを読み取り、検証済みのリクエストを組み立てる
pub async fn read_request(
    mut multipart: Multipart,
    limits: &Limits,
) -> Result<ProcessRequest, UploadError> {
    let mut query = None;
    let mut items: Vec<UploadItem> = Vec::new();

    while let Some(mut field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            IMAGES_FIELD => {
                // 上限を超えるパートは中身を読む前に拒否する
                if items.len() >= limits.max_items {
                    return Err(ValidationError::TooManyItems {
                        count: items.len() + 1,
                        max: limits.max_items,
                    }
                    .into());
                }

                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("image_{}", items.len() + 1));
                let mime_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_MIME_TYPE)
                    .to_string();

                validate_item(&filename, &mime_type, 0, limits)?;

                let mut buf = BytesMut::new();
                while let Some(chunk) = field.chunk().await? {
                    let total = (buf.len() + chunk.len()) as u64;
                    validate_item(&filename, &mime_type, total, limits)?;
                    buf.extend_from_slice(&chunk);
                }

                tracing::debug!(
                    filename = %filename,
                    mime_type = %mime_type,
                    size = buf.len(),
                    "received image"
                );
                items.push(UploadItem::new(filename, mime_type, buf.freeze()));
            }
            QUERY_FIELD => {
                query = Some(field.text().await?);
            }
            _ if field.file_name().is_some() => {
                // ファイルは images 以外のフィールドでは受け付けない
                return Err(ValidationError::UnexpectedField {
                    field: field_name.clone(),
                }
                .into());
            }
            _ => {
                // 未知のテキストフィールドは無視する
                tracing::debug!(field = %field_name, "ignoring unknown multipart field");
            }
        }
    }

    Ok(ProcessRequest::new(query, items, limits)?)
}
