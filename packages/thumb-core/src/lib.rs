pub mod constants;
pub mod errors;
pub mod model;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{
    DEFAULT_QUALITY, MAX_BATCH_ITEMS, MAX_DIMENSION, MAX_ITEM_BYTES, MAX_PIXELS, TARGET_HEIGHT,
    TARGET_WIDTH,
};
pub use errors::{TransformError, ValidationError};
pub use model::{ItemError, ProcessRequest, ProcessResponse, ProcessedResult, UploadItem};
pub use transform::{
    ImageTransformer, ResizeFit, Thumbnailer, TransformParams, decode_image, encode_jpeg,
    resize_image,
};
pub use validation::{Limits, validate_batch, validate_item, validate_params};
