//! Square convolution kernels and masks of weights.
use crate::grid::GridTraversal;
use crate::pixels::{Numeric, PixelVector, Sample};

/// Geometry of an odd-sized square neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareKernel {
    side: u32,
}

impl SquareKernel {
    /// # Panics
    ///
    /// Panics if `side` is zero or even.
    pub fn new(side: u32) -> Self {
        assert!(side > 0, "side of kernel must be greater than zero");
        assert!(side % 2 == 1, "side of kernel must be odd, got {}", side);
        Self { side }
    }

    #[inline(always)]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Offset of the central cell.
    #[inline(always)]
    pub fn mid(&self) -> u32 {
        self.side / 2
    }

    /// Build a mask with weights `f(i, j)`, where `i` is the column
    /// and `j` is the row of a kernel cell.
    pub fn compute_mask<N>(&self, mut f: impl FnMut(u32, u32) -> N) -> SquareMask<N> {
        let weights = GridTraversal::new(self.side, self.side)
            .map(|(i, j)| f(i, j))
            .collect();
        SquareMask {
            kernel: *self,
            weights,
        }
    }
}

/// Kernel with concrete weights stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMask<N> {
    kernel: SquareKernel,
    weights: Vec<N>,
}

impl<N> SquareMask<N> {
    /// # Panics
    ///
    /// Panics if the count of weights is not equal to `side * side`.
    pub fn new(kernel: SquareKernel, weights: Vec<N>) -> Self {
        let side = kernel.side() as usize;
        assert_eq!(
            weights.len(),
            side * side,
            "count of mask weights don't match to kernel size"
        );
        Self { kernel, weights }
    }

    /// Build a mask from a literal table of rows.
    pub fn from_rows<const S: usize>(rows: [[N; S]; S]) -> Self {
        let kernel = SquareKernel::new(S as u32);
        let weights = rows.into_iter().flatten().collect();
        Self::new(kernel, weights)
    }

    #[inline(always)]
    pub fn kernel(&self) -> SquareKernel {
        self.kernel
    }

    pub fn weights(&self) -> &[N] {
        &self.weights
    }
}

impl<N: Numeric> SquareMask<N> {
    /// Weight of the cell in column `i` and row `j`.
    #[inline(always)]
    pub fn weight(&self, i: u32, j: u32) -> N {
        self.weights[(j * self.kernel.side() + i) as usize]
    }

    /// Weighted sum of pixel vectors around `(x, y)`.
    ///
    /// The cell `(i, j)` of the mask is applied to the source pixel
    /// `(x + i - mid, y + j - mid)`. Pixels outside of the source
    /// contribute [PixelVector::unit] (zero padding).
    pub fn evaluate<V, S>(&self, x: u32, y: u32, source: &S) -> V
    where
        V: PixelVector<N>,
        S: Sample<V> + ?Sized,
    {
        let side = self.kernel.side();
        let mid = self.kernel.mid() as i64;
        let width = source.width() as i64;
        let height = source.height() as i64;

        let mut sum = V::unit();
        for ((i, j), &weight) in GridTraversal::new(side, side).zip(&self.weights) {
            let cur_x = x as i64 + i as i64 - mid;
            let cur_y = y as i64 + j as i64 - mid;
            let value = if cur_x < 0 || cur_y < 0 || cur_x >= width || cur_y >= height {
                V::unit()
            } else {
                source.sample(cur_x as u32, cur_y as u32)
            };
            sum = sum.add(value.scale(weight));
        }
        sum
    }
}
