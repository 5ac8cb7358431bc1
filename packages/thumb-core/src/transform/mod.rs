pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod params;
pub mod resize;
pub mod thumbnailer;

pub use decode::decode_image;
pub use dimensions::{CropBox, calculate_cover_crop};
pub use encode::encode_jpeg;
pub use params::{ResizeFit, TransformParams};
pub use resize::resize_image;
pub use thumbnailer::{ImageTransformer, Thumbnailer};
