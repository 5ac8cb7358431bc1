/// 出力サムネイルの幅（px）
pub const TARGET_WIDTH: u32 = 300;

/// 出力サムネイルの高さ（px）
pub const TARGET_HEIGHT: u32 = 300;

/// 変換パラメータで指定できる最大寸法（幅・高さ）
pub const MAX_DIMENSION: u32 = 4096;

/// デコード元画像の最大ピクセル数（展開爆弾の防止）
pub const MAX_PIXELS: u64 = 100_000_000;

/// デフォルト品質（1-100）
pub const DEFAULT_QUALITY: u8 = 80;

/// 1ファイルあたりの最大バイト数（5MiB）
pub const MAX_ITEM_BYTES: u64 = 5 * 1024 * 1024;

/// 1リクエストあたりの最大画像数
pub const MAX_BATCH_ITEMS: usize = 4;
