use std::f64::consts::PI;

use crate::convolution::{Convolution, PackedRgbCanvas, ScalarCanvas};
use crate::images::GenericImage;
use crate::kernel::{SquareKernel, SquareMask};
use crate::pixels::{Numeric, Scalar, Triple};

/// Gaussian convolution over packed `0xAARRGGBB` pixels.
pub type RgbGaussConvolution = Convolution<f64, Triple<f64>, PackedRgbCanvas>;

/// Gaussian convolution over single channel pixels of type `T`.
pub type GrayGaussConvolution<T> = Convolution<f64, Scalar<f64>, ScalarCanvas<T>>;

/// Returns the 2D Gaussian function with standard deviation `sigma`.
///
/// `gauss(sigma)(dx, dy) = exp(-(dx² + dy²) / (2σ²)) / (2πσ²)`
pub fn gauss(sigma: f64) -> impl Fn(f64, f64) -> f64 {
    let sigma2 = sigma * sigma;
    let norm = 1. / (2. * PI * sigma2);
    move |dx, dy| norm * (-(dx * dx + dy * dy) / (2. * sigma2)).exp()
}

/// Mask of Gaussian weights at absolute offsets from the central cell.
///
/// Weights are not normalised, so their sum is slightly less than one
/// and depends on the size of kernel.
pub fn gaussian_mask(kernel: SquareKernel, sigma: f64) -> SquareMask<f64> {
    let f = gauss(sigma);
    let mid = kernel.mid();
    kernel.compute_mask(|i, j| f(i.abs_diff(mid) as f64, j.abs_diff(mid) as f64))
}

/// Options of Gaussian blur.
///
/// ```
/// use edgemap::GaussianBlur;
///
/// let blur = GaussianBlur::new().side(5).sigma(1.4);
/// assert_eq!(blur.kernel().side(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBlur {
    kernel: SquareKernel,
    sigma: f64,
}

impl Default for GaussianBlur {
    fn default() -> Self {
        Self {
            kernel: SquareKernel::new(3),
            sigma: 1.0,
        }
    }
}

impl GaussianBlur {
    /// Blur with 3x3 kernel and `sigma = 1.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `side` is zero or even.
    pub fn side(mut self, side: u32) -> Self {
        self.kernel = SquareKernel::new(side);
        self
    }

    /// # Panics
    ///
    /// Panics if `sigma` is not a positive finite number.
    pub fn sigma(mut self, sigma: f64) -> Self {
        assert!(
            sigma.is_finite() && sigma > 0.,
            "sigma must be a positive finite number, got {}",
            sigma
        );
        self.sigma = sigma;
        self
    }

    #[inline(always)]
    pub fn kernel(&self) -> SquareKernel {
        self.kernel
    }

    #[inline(always)]
    pub fn sigma_value(&self) -> f64 {
        self.sigma
    }

    pub fn mask(&self) -> SquareMask<f64> {
        gaussian_mask(self.kernel, self.sigma)
    }

    pub fn rgb(&self) -> RgbGaussConvolution {
        Convolution::from_mask(self.mask(), PackedRgbCanvas)
    }

    pub fn gray<T: Numeric>(&self) -> GrayGaussConvolution<T> {
        Convolution::from_mask(self.mask(), ScalarCanvas::new())
    }

    /// Blur an image of packed `0xAARRGGBB` pixels.
    ///
    /// Pixels of the result are opaque.
    pub fn blur_rgb(&self, image: &GenericImage<u32>) -> GenericImage<u32> {
        self.rgb().apply(image)
    }

    /// Blur a single channel image.
    pub fn blur_gray<T>(&self, image: &GenericImage<T>) -> GenericImage<T>
    where
        T: Numeric + Into<f64>,
    {
        self.gray::<T>().apply(image)
    }
}
