//! Pixel vectors and numeric capabilities used by convolutions.
use std::fmt::Debug;
use std::ops::{Add, Mul};

use num_traits::{AsPrimitive, Zero};

use crate::images::{Dimensions, GenericImage};

/// Numeric type usable as a mask weight or a pixel component.
///
/// Implemented for all primitive integer and float types.
pub trait Numeric:
    Copy
    + Debug
    + Default
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Lossy conversion with the semantic of `as` (saturating for floats).
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;

    /// Truncating conversion with the semantic of `as`.
    fn to_i32(self) -> i32;
}

impl<T> Numeric for T
where
    T: Copy
        + Debug
        + Default
        + PartialOrd
        + Zero
        + Add<Output = T>
        + Mul<Output = T>
        + Send
        + Sync
        + AsPrimitive<f64>
        + AsPrimitive<i32>
        + 'static,
    f64: AsPrimitive<T>,
{
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value.as_()
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        AsPrimitive::<f64>::as_(self)
    }

    #[inline(always)]
    fn to_i32(self) -> i32 {
        AsPrimitive::<i32>::as_(self)
    }
}

mod private {
    pub trait Sealed {}
}

/// Vector-space operations over one pixel sample.
///
/// Implementations must satisfy:
/// - `a.add(b) == b.add(a)`, `a.add(b).add(c) == a.add(b.add(c))`;
/// - `a.add(Self::unit()) == a`;
/// - `a.add(b).scale(f) == a.scale(f).add(b.scale(f))`;
/// - `Self::unit().scale(f) == Self::unit()`.
///
/// The set of implementations is closed: [Scalar] and [Triple].
pub trait PixelVector<N: Numeric>: Copy + Debug + Send + Sync + private::Sealed {
    /// Additive identity ("transparent black").
    fn unit() -> Self;

    fn scale(self, factor: N) -> Self;

    fn add(self, other: Self) -> Self;
}

/// Single channel pixel sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scalar<N>(pub N);

/// Three channel pixel sample.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Triple<N> {
    pub r: N,
    pub g: N,
    pub b: N,
}

impl<N> Triple<N> {
    #[inline(always)]
    pub const fn new(r: N, g: N, b: N) -> Self {
        Self { r, g, b }
    }
}

impl<N> private::Sealed for Scalar<N> {}
impl<N> private::Sealed for Triple<N> {}

impl<N: Numeric> PixelVector<N> for Scalar<N> {
    #[inline(always)]
    fn unit() -> Self {
        Self(N::zero())
    }

    #[inline(always)]
    fn scale(self, factor: N) -> Self {
        Self(self.0 * factor)
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<N: Numeric> PixelVector<N> for Triple<N> {
    #[inline(always)]
    fn unit() -> Self {
        Self::new(N::zero(), N::zero(), N::zero())
    }

    #[inline(always)]
    fn scale(self, factor: N) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

/// Source of pixel vectors of type `V`.
pub trait Sample<V>: Dimensions {
    /// Returns the pixel vector at `(x, y)`.
    ///
    /// The coordinate must be inside of the source,
    /// callers check bounds before sampling.
    fn sample(&self, x: u32, y: u32) -> V;
}

impl<T, N> Sample<Scalar<N>> for GenericImage<T>
where
    T: Copy + Into<N>,
    N: Numeric,
{
    #[inline(always)]
    fn sample(&self, x: u32, y: u32) -> Scalar<N> {
        Scalar(self.get(x, y).into())
    }
}

/// Samples channels of packed `0xAARRGGBB` pixels. Alpha is ignored.
impl<N: Numeric> Sample<Triple<N>> for GenericImage<u32> {
    #[inline(always)]
    fn sample(&self, x: u32, y: u32) -> Triple<N> {
        let [r, g, b] = unpack_rgb(self.get(x, y));
        Triple::new(
            N::from_f64(r as f64),
            N::from_f64(g as f64),
            N::from_f64(b as f64),
        )
    }
}

impl<T, N> Sample<Triple<N>> for GenericImage<Triple<T>>
where
    T: Copy + Into<N>,
    N: Numeric,
{
    #[inline(always)]
    fn sample(&self, x: u32, y: u32) -> Triple<N> {
        let pixel = self.get(x, y);
        Triple::new(pixel.r.into(), pixel.g.into(), pixel.b.into())
    }
}

/// Packs RGB components into an opaque `0xFFRRGGBB` pixel.
#[inline(always)]
pub fn pack_argb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Returns `[r, g, b]` components of a packed `0xAARRGGBB` pixel.
#[inline(always)]
pub fn unpack_rgb(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

/// Luma of a packed `0xAARRGGBB` pixel (ITU-R BT.601 weights).
pub fn luma_of_argb(pixel: u32) -> u8 {
    let [r, g, b] = unpack_rgb(pixel);
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64).round() as u8
}
