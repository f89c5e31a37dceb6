use crate::convolution::{Convolution, GradientCanvas};
use crate::images::GenericImage;
use crate::kernel::SquareMask;
use crate::pixels::{Sample, Scalar};

/// Weights of the horizontal derivative, rows from top to bottom.
pub const SOBEL_X: [[f64; 3]; 3] = [[-1., 0., 1.], [-2., 0., 2.], [-1., 0., 1.]];

/// Weights of the vertical derivative, rows from top to bottom.
pub const SOBEL_Y: [[f64; 3]; 3] = [[-1., -2., -1.], [0., 0., 0.], [1., 2., 1.]];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SobelDirection {
    /// Responds to intensity changes along the X axis (vertical edges).
    X,
    /// Responds to intensity changes along the Y axis (horizontal edges).
    Y,
}

/// Sobel operator computing a gradient field of a single channel image.
#[derive(Debug, Clone)]
pub struct SobelOperator {
    direction: SobelDirection,
    convolution: Convolution<f64, Scalar<f64>, GradientCanvas>,
}

impl SobelOperator {
    pub fn new(direction: SobelDirection) -> Self {
        let weights = match direction {
            SobelDirection::X => SOBEL_X,
            SobelDirection::Y => SOBEL_Y,
        };
        Self {
            direction,
            convolution: Convolution::from_mask(
                SquareMask::from_rows(weights),
                GradientCanvas::new(),
            ),
        }
    }

    pub fn x() -> Self {
        Self::new(SobelDirection::X)
    }

    pub fn y() -> Self {
        Self::new(SobelDirection::Y)
    }

    #[inline(always)]
    pub fn direction(&self) -> SobelDirection {
        self.direction
    }

    pub fn mask(&self) -> &SquareMask<f64> {
        self.convolution.mask()
    }

    /// Gradient field with the same dimensions as `source`.
    pub fn apply<S>(&self, source: &S) -> GenericImage<f64>
    where
        S: Sample<Scalar<f64>> + Sync + ?Sized,
    {
        self.convolution.apply(source)
    }
}
