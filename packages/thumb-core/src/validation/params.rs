use crate::constants::MAX_DIMENSION;
use crate::errors::TransformError;

/// 変換パラメータを検証する
pub fn validate_params(width: u32, height: u32, quality: u8) -> Result<(), TransformError> {
    // 品質の検証
    if quality == 0 || quality > 100 {
        return Err(TransformError::InvalidParams(format!(
            "quality must be 1-100, got {quality}"
        )));
    }

    // 幅の検証
    if width == 0 || width > MAX_DIMENSION {
        return Err(TransformError::InvalidParams(format!(
            "width must be 1-{MAX_DIMENSION}, got {width}"
        )));
    }

    // 高さの検証
    if height == 0 || height > MAX_DIMENSION {
        return Err(TransformError::InvalidParams(format!(
            "height must be 1-{MAX_DIMENSION}, got {height}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        assert!(validate_params(300, 300, 80).is_ok());
        assert!(validate_params(1, 1, 1).is_ok());
        assert!(validate_params(MAX_DIMENSION, MAX_DIMENSION, 100).is_ok());
    }

    #[test]
    fn test_invalid_quality() {
        assert!(validate_params(300, 300, 0).is_err());
        assert!(validate_params(300, 300, 101).is_err());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(validate_params(0, 300, 80).is_err());
        assert!(validate_params(5000, 300, 80).is_err());
        assert!(validate_params(300, 5000, 80).is_err());
    }
}
