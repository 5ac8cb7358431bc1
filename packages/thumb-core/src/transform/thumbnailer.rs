use crate::errors::TransformError;
use crate::transform::{TransformParams, decode_image, encode_jpeg, resize_image};
use crate::validation::validate_params;

/// 1画像分の変換処理
///
/// 呼び出し間で可変状態を共有しない。CPU バウンドなので、
/// 非同期ランタイムからはブロッキングワーカー上で呼び出すこと。
pub trait ImageTransformer: Send + Sync + 'static {
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError>;
}

/// デコード → リサイズ → JPEG エンコードを行う標準の変換器
#[derive(Debug, Clone, Copy, Default)]
pub struct Thumbnailer {
    params: TransformParams,
}

impl Thumbnailer {
    pub fn new(params: TransformParams) -> Result<Self, TransformError> {
        validate_params(params.width, params.height, params.quality)?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }
}

impl ImageTransformer for Thumbnailer {
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        let img = decode_image(input)?;
        let resized = resize_image(&img, self.params.width, self.params.height, self.params.fit)?;
        encode_jpeg(&resized, self.params.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ResizeFit;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_transform_png_to_jpeg_thumbnail() {
        let thumbnailer = Thumbnailer::default();
        let output = thumbnailer.transform(&encoded(640, 480, ImageFormat::Png)).unwrap();

        assert_eq!(&output[0..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!(decoded.width(), 300);
        assert_eq!(decoded.height(), 300);
    }

    #[test]
    fn test_transform_jpeg_input() {
        let thumbnailer = Thumbnailer::default();
        let output = thumbnailer.transform(&encoded(120, 80, ImageFormat::Jpeg)).unwrap();

        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 300));
    }

    #[test]
    fn test_transform_cover() {
        let params = TransformParams {
            fit: ResizeFit::Cover,
            ..TransformParams::default()
        };
        let thumbnailer = Thumbnailer::new(params).unwrap();
        let output = thumbnailer.transform(&encoded(800, 200, ImageFormat::Png)).unwrap();

        let decoded = image::load_from_memory(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 300));
    }

    #[test]
    fn test_transform_corrupt_input() {
        let thumbnailer = Thumbnailer::default();
        let result = thumbnailer.transform(b"plain text, no image signature");
        assert!(matches!(result, Err(TransformError::Decode(_))));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let thumbnailer = Thumbnailer::default();
        let input = encoded(200, 150, ImageFormat::Png);

        let first = thumbnailer.transform(&input).unwrap();
        let second = thumbnailer.transform(&input).unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_new_rejects_invalid_params() {
        let params = TransformParams {
            quality: 0,
            ..TransformParams::default()
        };
        assert!(matches!(
            Thumbnailer::new(params),
            Err(TransformError::InvalidParams(_))
        ));
    }
}
