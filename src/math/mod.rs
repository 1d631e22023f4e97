mod color;
mod ray;

pub use color::hsv_to_rgb;
pub use ray::Ray;
