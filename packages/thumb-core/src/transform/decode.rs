use crate::constants::MAX_PIXELS;
use crate::errors::TransformError;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードする
///
/// フォーマットは宣言された MIME タイプではなく内容から推測する。
pub fn decode_image(input: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(format!("failed to guess format: {e}")))?;

    if reader.format().is_none() {
        return Err(TransformError::Decode("unrecognized image format".to_string()));
    }

    let decoder = reader
        .into_decoder()
        .map_err(|e| TransformError::Decode(e.to_string()))?;

    // ヘッダの寸法でピクセル数を確認してから全体をデコードする
    let (width, height) = decoder.dimensions();
    validate_source_dimensions(width, height)?;

    DynamicImage::from_decoder(decoder).map_err(|e| TransformError::Decode(e.to_string()))
}

/// ソース画像の総ピクセル数を検証し、メモリ枯渇を防ぐ
fn validate_source_dimensions(width: u32, height: u32) -> Result<(), TransformError> {
    let total_pixels = width as u64 * height as u64;
    if total_pixels > MAX_PIXELS {
        return Err(TransformError::ResolutionTooLarge { width, height });
    }
    Ok(())
}
