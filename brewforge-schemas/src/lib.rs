pub mod carbonation;
pub mod file_formats;
pub mod gravity;
pub mod recipe;
pub mod water;
