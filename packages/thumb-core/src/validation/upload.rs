use crate::errors::ValidationError;
use crate::validation::Limits;

/// 受け付ける MIME タイプの接頭辞
const IMAGE_MIME_PREFIX: &str = "image/";

/// アップロードされた1ファイルを検証する
///
/// 宣言された MIME タイプが `image/` で始まり、
/// サイズが上限以下の場合のみ受け付ける。
pub fn validate_item(
    filename: &str,
    mime_type: &str,
    byte_len: u64,
    limits: &Limits,
) -> Result<(), ValidationError> {
    if !mime_type.starts_with(IMAGE_MIME_PREFIX) {
        return Err(ValidationError::UnsupportedMediaType {
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
        });
    }

    if byte_len > limits.max_item_bytes {
        return Err(ValidationError::ItemTooLarge {
            filename: filename.to_string(),
            size: byte_len,
            max: limits.max_item_bytes,
        });
    }

    Ok(())
}

/// リクエスト全体を検証する
pub fn validate_batch(
    query: Option<&str>,
    item_count: usize,
    limits: &Limits,
) -> Result<(), ValidationError> {
    if query.is_none_or(str::is_empty) {
        return Err(ValidationError::MissingQuery);
    }

    if item_count == 0 {
        return Err(ValidationError::EmptyBatch);
    }

    if item_count > limits.max_items {
        return Err(ValidationError::TooManyItems {
            count: item_count,
            max: limits.max_items,
        });
    }

    Ok(())
}
