use std::marker::PhantomData;

use crate::convolution::Canvas;
use crate::images::{CanvasMut, Dimensions, GenericImage};
use crate::pixels::{pack_argb, Numeric, Scalar, Triple};

/// Canvas with one value of type `T` per pixel.
///
/// Aggregated values are converted with the semantic of `as`,
/// i.e. floats are truncated and saturated into the range of integer `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarCanvas<T> {
    pixel: PhantomData<fn() -> T>,
}

impl<T> ScalarCanvas<T> {
    pub fn new() -> Self {
        Self { pixel: PhantomData }
    }
}

/// Canvas of a gradient field.
pub type GradientCanvas = ScalarCanvas<f64>;

impl<N: Numeric, T: Numeric> Canvas<Scalar<N>> for ScalarCanvas<T> {
    type Pixel = T;

    fn allocate(&self, source: &(impl Dimensions + ?Sized)) -> GenericImage<T> {
        GenericImage::new(source.width(), source.height())
    }

    #[inline(always)]
    fn write_back(&self, x: u32, y: u32, value: Scalar<N>, canvas: &mut impl CanvasMut<T>) {
        canvas.set(x, y, T::from_f64(value.0.to_f64()));
    }
}

/// Canvas of opaque packed `0xFFRRGGBB` pixels.
///
/// Every channel is truncated and saturated into `[0, 255]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedRgbCanvas;

impl<N: Numeric> Canvas<Triple<N>> for PackedRgbCanvas {
    type Pixel = u32;

    fn allocate(&self, source: &(impl Dimensions + ?Sized)) -> GenericImage<u32> {
        GenericImage::new(source.width(), source.height())
    }

    #[inline(always)]
    fn write_back(&self, x: u32, y: u32, value: Triple<N>, canvas: &mut impl CanvasMut<u32>) {
        let channel = |c: N| u8::from_f64(c.to_f64());
        canvas.set(
            x,
            y,
            pack_argb(channel(value.r), channel(value.g), channel(value.b)),
        );
    }
}
