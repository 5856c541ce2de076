//! Errors

use thiserror::Error;

/// Errors from buffer construction and image output
///
/// Drawing itself never fails; see [Triangle::draw](../struct.Triangle.html#method.draw)
#[derive(Error, Debug)]
pub enum Error {
    #[error("buffer holds {actual} elements, {expected} required")]
    BufferSize { expected: usize, actual: usize },
    #[error("buffer dimensions must be non-zero, got {width}x{height}")]
    ZeroSize { width: usize, height: usize },
    #[error("unknown rasterization strategy {0:?}, expected \"halfspace\" or \"scanline\"")]
    UnknownStrategy(String),
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
