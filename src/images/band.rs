use crate::grid::GridTraversal;
use crate::images::{CanvasMut, Dimensions};

/// Mutable horizontal band of rows borrowed from a [GenericImage](crate::GenericImage).
///
/// Pixels are addressed in coordinates of the whole image, so a band
/// can be used as a canvas exactly like the image it was split from.
#[derive(Debug)]
pub struct ImageBandMut<'a, T> {
    width: u32,
    top: u32,
    height: u32,
    pixels: &'a mut [T],
}

impl<'a, T> ImageBandMut<'a, T> {
    pub(crate) fn new(width: u32, top: u32, height: u32, pixels: &'a mut [T]) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            top,
            height,
            pixels,
        }
    }

    /// Index of the first row of the band in the source image.
    #[inline(always)]
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Coordinates of all pixels of the band, in row-major order.
    pub fn coordinates(&self) -> GridTraversal {
        GridTraversal::rect(0, self.top, self.width, self.height)
    }
}

impl<T> Dimensions for ImageBandMut<'_, T> {
    #[inline(always)]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> CanvasMut<T> for ImageBandMut<'_, T> {
    /// `y` must be inside `[top, top + height)`.
    #[inline(always)]
    fn set(&mut self, x: u32, y: u32, value: T) {
        let index = (y - self.top) as usize * self.width as usize + x as usize;
        self.pixels[index] = value;
    }
}
