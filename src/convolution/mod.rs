//! Generic convolution driver.
//!
//! A convolution binds a [SquareMask] with a [Canvas]. The mask computes
//! an aggregated pixel vector for every coordinate of the result and
//! the canvas decides how the result is allocated and how an aggregated
//! vector is stored into it.
use std::marker::PhantomData;

pub use canvas::*;

use crate::grid::GridTraversal;
use crate::images::{CanvasMut, Dimensions, GenericImage};
use crate::kernel::{SquareKernel, SquareMask};
use crate::pixels::{Numeric, PixelVector, Sample};

mod canvas;

/// Allocation and write-back strategy of a convolution result.
pub trait Canvas<V> {
    type Pixel;

    /// Create an empty result for the given source.
    fn allocate(&self, source: &(impl Dimensions + ?Sized)) -> GenericImage<Self::Pixel>;

    /// Store the aggregated `value` of pixel `(x, y)` into `canvas`.
    fn write_back(&self, x: u32, y: u32, value: V, canvas: &mut impl CanvasMut<Self::Pixel>);
}

/// Evaluate `mask` for every pixel of the canvas allocated for `source`.
///
/// Pixels are processed in row-major order. With the `rayon` feature
/// big canvases are split into bands of rows processed in parallel.
/// Every pixel is computed independently, so the result doesn't depend
/// on the way of processing.
pub fn convolve<N, V, S, C>(mask: &SquareMask<N>, canvas: &C, source: &S) -> GenericImage<C::Pixel>
where
    N: Numeric,
    V: PixelVector<N>,
    S: Sample<V> + Sync + ?Sized,
    C: Canvas<V> + Sync,
    C::Pixel: Send,
{
    let mut result = canvas.allocate(source);

    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            use rayon::prelude::*;

            let processed_by_bands =
                if let Some(bands) = crate::threading::split_h_image_for_threading(&mut result) {
                    bands.for_each(|mut band| {
                        for (x, y) in band.coordinates() {
                            let value = mask.evaluate(x, y, source);
                            canvas.write_back(x, y, value, &mut band);
                        }
                    });
                    true
                } else {
                    false
                };
            if processed_by_bands {
                return result;
            }
        }
    }

    for (x, y) in GridTraversal::new(result.width(), result.height()) {
        let value = mask.evaluate(x, y, source);
        canvas.write_back(x, y, value, &mut result);
    }
    result
}

/// Mask bound with a canvas strategy.
///
/// The instance is stateless: every call of [Convolution::apply]
/// allocates and returns a new result.
#[derive(Debug, Clone)]
pub struct Convolution<N, V, C> {
    mask: SquareMask<N>,
    canvas: C,
    vector: PhantomData<fn() -> V>,
}

impl<N, V, C> Convolution<N, V, C>
where
    N: Numeric,
    V: PixelVector<N>,
    C: Canvas<V>,
{
    /// Create a convolution with mask weights produced by `weight(i, j)`.
    pub fn new(kernel: SquareKernel, weight: impl FnMut(u32, u32) -> N, canvas: C) -> Self {
        Self::from_mask(kernel.compute_mask(weight), canvas)
    }

    pub fn from_mask(mask: SquareMask<N>, canvas: C) -> Self {
        Self {
            mask,
            canvas,
            vector: PhantomData,
        }
    }

    pub fn mask(&self) -> &SquareMask<N> {
        &self.mask
    }

    pub fn apply<S>(&self, source: &S) -> GenericImage<C::Pixel>
    where
        S: Sample<V> + Sync + ?Sized,
        C: Sync,
        C::Pixel: Send,
    {
        convolve(&self.mask, &self.canvas, source)
    }
}
