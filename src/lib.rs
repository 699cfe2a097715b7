//! Cut a source icon into fixed square PNG sizes.
//!
//! Each size is a scale-to-cover Lanczos3 resample followed by a center
//! crop, written next to the source as `icon_<size>.png`.

pub mod config;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod transform;
pub mod utils;

pub use config::{IconJob, ICON_SIZES, SOURCE_PATH};
pub use error::{IconError, Result};
pub use pipeline::run;
pub use transform::{scale_and_crop, CropPlan};
