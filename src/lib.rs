#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use convolution::{
    convolve, Canvas, Convolution, GradientCanvas, PackedRgbCanvas, ScalarCanvas,
};
pub use edges::{EdgeDetector, Gradients};
pub use errors::*;
pub use gauss::*;
pub use grid::GridTraversal;
pub use images::*;
pub use kernel::{SquareKernel, SquareMask};
pub use sobel::*;
pub use visualize::{ImageVisualizer, VisualizationMode};

mod convolution;
mod edges;
mod errors;
mod gauss;
mod grid;
mod images;
mod kernel;
pub mod pixels;
mod sobel;
#[cfg(feature = "rayon")]
mod threading;
mod visualize;
