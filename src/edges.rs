use crate::gauss::GaussianBlur;
use crate::images::GenericImage;
use crate::pixels::{luma_of_argb, Numeric};
use crate::sobel::SobelOperator;

/// Gradient fields of an image along both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub x: GenericImage<f64>,
    pub y: GenericImage<f64>,
}

impl Gradients {
    /// Per-pixel magnitude `sqrt(gx² + gy²)`.
    pub fn magnitude(&self) -> GenericImage<f64> {
        self.x.combine(&self.y, |gx, gy| (gx * gx + gy * gy).sqrt())
    }
}

/// Blurs an image, then computes the magnitude of its Sobel gradient.
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    blur: GaussianBlur,
    sobel_x: SobelOperator,
    sobel_y: SobelOperator,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new(GaussianBlur::default())
    }
}

impl EdgeDetector {
    pub fn new(blur: GaussianBlur) -> Self {
        Self {
            blur,
            sobel_x: SobelOperator::x(),
            sobel_y: SobelOperator::y(),
        }
    }

    pub fn blur(&self) -> &GaussianBlur {
        &self.blur
    }

    /// Sobel gradients of the blurred image.
    ///
    /// The blurred image is kept in `f64`, without rounding to `T`.
    pub fn gradients<T>(&self, image: &GenericImage<T>) -> Gradients
    where
        T: Numeric + Into<f64>,
    {
        let blurred = self.blur.gray::<f64>().apply(image);
        Gradients {
            x: self.sobel_x.apply(&blurred),
            y: self.sobel_y.apply(&blurred),
        }
    }

    /// Magnitude field of a single channel image.
    pub fn detect_edges<T>(&self, image: &GenericImage<T>) -> GenericImage<f64>
    where
        T: Numeric + Into<f64>,
    {
        self.gradients(image).magnitude()
    }

    /// Magnitude field of an image of packed `0xAARRGGBB` pixels.
    ///
    /// Edges are detected in the luma of the image.
    pub fn detect_edges_rgb(&self, image: &GenericImage<u32>) -> GenericImage<f64> {
        self.detect_edges(&image.map(luma_of_argb))
    }
}
