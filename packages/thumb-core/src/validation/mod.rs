mod limits;
mod params;
mod upload;

pub use limits::Limits;
pub use params::validate_params;
pub use upload::{validate_batch, validate_item};
