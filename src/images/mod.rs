//! Contains the generic image container and views into it.
pub use band::*;
pub use generic_image::*;

mod band;
mod generic_image;

#[cfg(feature = "image")]
mod image_crate;

/// Size of a rectangular image-like container.
pub trait Dimensions {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Container with writable pixels which can be used as a convolution canvas.
pub trait CanvasMut<T>: Dimensions {
    /// Writes pixel at `(x, y)` given in coordinates of the whole canvas.
    fn set(&mut self, x: u32, y: u32, value: T);
}
