use crate::constants::MAX_DIMENSION;
use crate::errors::TransformError;
use crate::transform::dimensions::{CropBox, calculate_cover_crop};
use crate::transform::params::ResizeFit;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::DynamicImage;

/// 画像を目標サイズちょうどにリサイズする
///
/// fast_image_resize の Lanczos3 フィルタを使用する。
/// `Fill` は縦横を独立に伸縮し、`Cover` は中央を切り出してから縮小する。
/// どちらも出力は必ず `target_w` x `target_h` になる。
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
    fit: ResizeFit,
) -> Result<DynamicImage, TransformError> {
    if target_w == 0 || target_h == 0 {
        return Err(TransformError::InvalidParams(format!(
            "target size must be non-zero, got {target_w}x{target_h}"
        )));
    }
    if target_w > MAX_DIMENSION || target_h > MAX_DIMENSION {
        return Err(TransformError::ResolutionTooLarge {
            width: target_w,
            height: target_h,
        });
    }

    // RGB8 に変換（JPEG 出力なのでアルファは落とす）
    let rgb_img = img.to_rgb8();
    let width = rgb_img.width();
    let height = rgb_img.height();

    let src_image = Image::from_vec_u8(width, height, rgb_img.into_raw(), PixelType::U8x3)
        .map_err(|e| TransformError::Resize(format!("failed to create source image: {e}")))?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);

    let crop = match fit {
        ResizeFit::Fill => CropBox::full(width, height),
        ResizeFit::Cover => calculate_cover_crop(width, height, target_w, target_h),
    };
    let options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .crop(crop.left, crop.top, crop.width, crop.height);

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| TransformError::Resize(e.to_string()))?;

    let resized_rgb = image::RgbImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| TransformError::Resize("failed to convert resized image".to_string()))?;

    Ok(DynamicImage::ImageRgb8(resized_rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_fill_downscale() {
        let img = DynamicImage::new_rgb8(1000, 500);
        let resized = resize_image(&img, 300, 300, ResizeFit::Fill).unwrap();

        assert_eq!(resized.width(), 300);
        assert_eq!(resized.height(), 300);
    }

    #[test]
    fn test_resize_fill_upscale() {
        // 小さい画像も目標サイズまで拡大する
        let img = DynamicImage::new_rgb8(10, 40);
        let resized = resize_image(&img, 300, 300, ResizeFit::Fill).unwrap();

        assert_eq!(resized.width(), 300);
        assert_eq!(resized.height(), 300);
    }

    #[test]
    fn test_resize_cover() {
        let img = DynamicImage::new_rgb8(1920, 1080);
        let resized = resize_image(&img, 300, 300, ResizeFit::Cover).unwrap();

        assert_eq!(resized.width(), 300);
        assert_eq!(resized.height(), 300);
    }

    #[test]
    fn test_resize_rgba_source() {
        let img = DynamicImage::new_rgba8(64, 64);
        let resized = resize_image(&img, 300, 300, ResizeFit::Fill).unwrap();

        assert!(matches!(resized, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn test_resize_invalid_target() {
        let img = DynamicImage::new_rgb8(100, 100);

        let result = resize_image(&img, 100000, 100000, ResizeFit::Fill);
        match result.unwrap_err() {
            TransformError::ResolutionTooLarge { width, height } => {
                assert_eq!(width, 100000);
                assert_eq!(height, 100000);
            }
            _ => panic!("expected ResolutionTooLarge error"),
        }
    }

    #[test]
    fn test_resize_zero_target() {
        let img = DynamicImage::new_rgb8(100, 100);

        assert!(matches!(
            resize_image(&img, 0, 300, ResizeFit::Fill),
            Err(TransformError::InvalidParams(_))
        ));
        assert!(matches!(
            resize_image(&img, 300, 0, ResizeFit::Cover),
            Err(TransformError::InvalidParams(_))
        ));
    }
}
