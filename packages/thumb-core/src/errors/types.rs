use thiserror::Error;

/// アップロード検証エラー
///
/// どの検証ルールに違反したかをバリアントで区別する。
/// メッセージはそのままクライアントに返される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Only image files are allowed! ({filename}: {mime_type})")]
    UnsupportedMediaType { filename: String, mime_type: String },

    #[error("File too large: {filename} exceeds {max} bytes")]
    ItemTooLarge {
        filename: String,
        size: u64,
        max: u64,
    },

    #[error("Missing query or images.")]
    MissingQuery,

    #[error("Missing query or images.")]
    EmptyBatch,

    #[error("Unexpected field: {field}")]
    UnexpectedField { field: String },

    #[error("Too many images: at most {max} allowed")]
    TooManyItems { count: usize, max: usize },
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("encode failed: {0}")]
    Encode(String),
}
