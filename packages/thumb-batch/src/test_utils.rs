//! テスト用のヘルパー

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{DynamicImage, ImageFormat};
use thumb_core::{
    ImageTransformer, Limits, ProcessRequest, Thumbnailer, TransformError, UploadItem,
};

/// 呼び出し回数を数える変換器（中身は標準の Thumbnailer）
#[derive(Default)]
pub struct CountingTransformer {
    inner: Thumbnailer,
    calls: AtomicUsize,
}

impl CountingTransformer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageTransformer for CountingTransformer {
    fn transform(&self, input: &[u8]) -> Result<Vec<u8>, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.transform(input)
    }
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .expect("failed to encode fixture image");
    buf.into_inner()
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

/// デフォルト上限で検証済みのリクエストを作る
pub fn request(query: &str, items: Vec<UploadItem>) -> ProcessRequest {
    ProcessRequest::new(Some(query.to_string()), items, &Limits::default())
        .expect("fixture request should be valid")
}
