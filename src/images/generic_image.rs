use std::num::NonZeroU32;

use crate::grid::GridTraversal;
use crate::images::{CanvasMut, Dimensions, ImageBandMut};
use crate::pixels::Numeric;
use crate::{EmptyImageError, InvalidPixelsSize};

/// Dense 2D buffer of pixels stored in row-major order.
///
/// Pixel `(x, y)` is stored by index `y * width + x`. Images with zero width
/// or height are allowed, they just don't have pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericImage<T> {
    width: u32,
    height: u32,
    pixels: Vec<T>,
}

impl<T: Default + Clone> GenericImage<T> {
    /// Create an image filled with default values of `T`.
    pub fn new(width: u32, height: u32) -> Self {
        let pixels_count = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![T::default(); pixels_count],
        }
    }
}

impl<T> GenericImage<T> {
    pub fn from_vec(width: u32, height: u32, pixels: Vec<T>) -> Result<Self, InvalidPixelsSize> {
        let pixels_count = width as usize * height as usize;
        if pixels.len() != pixels_count {
            return Err(InvalidPixelsSize);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image with pixels returned by `f(x, y)`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let pixels = GridTraversal::new(width, height)
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image from rows of pixels. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, InvalidPixelsSize> {
        let height = u32::try_from(rows.len()).map_err(|_| InvalidPixelsSize)?;
        let row_size = rows.first().map_or(0, |row| row.len());
        let width = u32::try_from(row_size).map_err(|_| InvalidPixelsSize)?;
        if rows.iter().any(|row| row.len() != row_size) {
            return Err(InvalidPixelsSize);
        }
        let pixels = rows.into_iter().flatten().collect();
        Self::from_vec(width, height, pixels)
    }

    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.pixels
    }

    pub fn into_vec(self) -> Vec<T> {
        self.pixels
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Write pixel at `(x, y)`.
    ///
    /// Coordinates are not validated and no bounds check is added on purpose.
    /// A coordinate outside of the image either writes some other pixel
    /// (`x >= width` lands on a following row) or panics if the resulting
    /// index is out of the buffer. [GenericImage::get] reads the same way.
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let index = self.index(x, y);
        self.pixels[index] = value;
    }

    /// Iterate over rows of the image starting from the top one.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.pixels[y * width..(y + 1) * width])
    }

    /// Split the image by height into `num_parts` disjoint bands of rows.
    ///
    /// Returns `None` if `num_parts` is greater than the height of the image.
    pub fn split_by_height_mut(&mut self, num_parts: NonZeroU32) -> Option<Vec<ImageBandMut<'_, T>>> {
        let height = self.height;
        let num_parts = num_parts.get();
        if num_parts > height {
            return None;
        }
        let mut res = Vec::with_capacity(num_parts as usize);
        let step = height / num_parts;
        let mut modulo = height % num_parts;
        let mut top = 0;
        let row_size = self.width as usize;
        let mut remains_pixels = self.pixels.as_mut_slice();
        for _ in 0..num_parts {
            let mut part_height = step;
            if modulo > 0 {
                part_height += 1;
                modulo -= 1;
            }
            let parts = remains_pixels.split_at_mut(part_height as usize * row_size);
            res.push(ImageBandMut::new(self.width, top, part_height, parts.0));
            remains_pixels = parts.1;
            top += part_height;
        }
        debug_assert!(top == height);
        Some(res)
    }
}

impl<T: Copy> GenericImage<T> {
    /// Read pixel at `(x, y)`.
    ///
    /// Coordinates are not validated, see [GenericImage::set].
    #[inline(always)]
    pub fn get(&self, x: u32, y: u32) -> T {
        self.pixels[self.index(x, y)]
    }

    /// Returns a new image with `f` applied to every pixel.
    pub fn map<U>(&self, f: impl FnMut(T) -> U) -> GenericImage<U> {
        GenericImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Returns a new image with `f(x, y, pixel)` applied to every pixel.
    pub fn map_with_index<U>(&self, mut f: impl FnMut(u32, u32, T) -> U) -> GenericImage<U> {
        GenericImage::from_fn(self.width, self.height, |x, y| f(x, y, self.get(x, y)))
    }

    /// Combine pixels of two images with equal dimensions.
    ///
    /// # Panics
    ///
    /// Panics if dimensions of `other` differ from dimensions of `self`.
    pub fn combine<U: Copy, R>(
        &self,
        other: &GenericImage<U>,
        mut f: impl FnMut(T, U) -> R,
    ) -> GenericImage<R> {
        assert!(
            self.width == other.width && self.height == other.height,
            "dimensions of combined images must be equal: {}x{} != {}x{}",
            self.width,
            self.height,
            other.width,
            other.height,
        );
        let pixels = self
            .pixels
            .iter()
            .zip(&other.pixels)
            .map(|(&a, &b)| f(a, b))
            .collect();
        GenericImage {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Left fold over all pixels in row-major order.
    pub fn fold<B>(&self, init: B, f: impl FnMut(B, T) -> B) -> B {
        self.pixels.iter().copied().fold(init, f)
    }

    pub fn count(&self, mut predicate: impl FnMut(T) -> bool) -> usize {
        self.pixels.iter().filter(|&&v| predicate(v)).count()
    }

    pub fn count_with_index(&self, mut predicate: impl FnMut(u32, u32, T) -> bool) -> usize {
        GridTraversal::new(self.width, self.height)
            .filter(|&(x, y)| predicate(x, y, self.get(x, y)))
            .count()
    }

    /// Crop the rectangle with top-left corner `(x_upper, y_upper)` and
    /// bottom-right corner `(x_lower, y_lower)`.
    ///
    /// Size of the result is `(x_lower - x_upper) x (y_lower - y_upper)`,
    /// so the pixel `(0, 0)` of the result is the pixel `(x_upper, y_upper)`
    /// of the source.
    ///
    /// # Panics
    ///
    /// Panics if a corner is out of the image or the lower corner
    /// is before the upper one.
    pub fn subregion(&self, x_upper: u32, y_upper: u32, x_lower: u32, y_lower: u32) -> Self {
        assert!(
            x_upper < self.width && x_lower < self.width,
            "x coordinates of subregion corners are out of the image"
        );
        assert!(
            y_upper < self.height && y_lower < self.height,
            "y coordinates of subregion corners are out of the image"
        );
        assert!(
            x_upper <= x_lower && y_upper <= y_lower,
            "lower corner of subregion is before the upper one"
        );
        GenericImage::from_fn(x_lower - x_upper, y_lower - y_upper, |x, y| {
            self.get(x + x_upper, y + y_upper)
        })
    }

    /// Copy of pixels in row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.pixels.clone()
    }

    /// Copy of pixels as a vector of rows.
    pub fn to_2d_vec(&self) -> Vec<Vec<T>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl<T: Copy + PartialOrd> GenericImage<T> {
    /// The greatest pixel value.
    ///
    /// Of several equal maximums the first one in row-major order is returned.
    pub fn max(&self) -> Result<T, EmptyImageError> {
        self.extremum(|candidate, current| candidate > current)
    }

    /// The least pixel value.
    ///
    /// Of several equal minimums the first one in row-major order is returned.
    pub fn min(&self) -> Result<T, EmptyImageError> {
        self.extremum(|candidate, current| candidate < current)
    }

    fn extremum(&self, replace: impl Fn(&T, &T) -> bool) -> Result<T, EmptyImageError> {
        let first = *self.pixels.first().ok_or(EmptyImageError)?;
        Ok(self.fold(first, |current, candidate| {
            if replace(&candidate, &current) {
                candidate
            } else {
                current
            }
        }))
    }
}

impl<T: Numeric> GenericImage<T> {
    /// Count pixel values falling into `bins` equal-width buckets
    /// between the least and the greatest pixel values.
    ///
    /// The last bucket includes the greatest value. If all pixels are equal,
    /// they all are counted in the first bucket.
    ///
    /// # Panics
    ///
    /// Panics if `bins` is zero.
    pub fn histogram(&self, bins: usize) -> Result<Vec<usize>, EmptyImageError> {
        assert!(bins > 0, "count of histogram bins must be greater than zero");
        let min = self.min()?.to_f64();
        let max = self.max()?.to_f64();
        let range = max - min;
        let mut res = vec![0; bins];
        for &value in self.pixels.iter() {
            let bin = if range > 0. {
                let pos = (value.to_f64() - min) / range * bins as f64;
                (pos as usize).min(bins - 1)
            } else {
                0
            };
            res[bin] += 1;
        }
        Ok(res)
    }
}

impl<T> Dimensions for GenericImage<T> {
    #[inline(always)]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline(always)]
    fn height(&self) -> u32 {
        self.height
    }
}

impl<T> CanvasMut<T> for GenericImage<T> {
    #[inline(always)]
    fn set(&mut self, x: u32, y: u32, value: T) {
        GenericImage::set(self, x, y, value)
    }
}
