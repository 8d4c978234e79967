pub mod image_result;

pub use image_result::ImageResult;
