//! Row-major traversal of rectangular regions.

/// Iterator over `(x, y)` coordinates of a rectangle.
///
/// Rows are visited from top to bottom, pixels of a row from left to
/// right. An empty rectangle yields nothing.
#[derive(Debug, Clone, Copy)]
pub struct GridTraversal {
    left: u32,
    right: u32,
    bottom: u32,
    x: u32,
    y: u32,
}

impl GridTraversal {
    /// Traversal of `[0, width) x [0, height)`.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self::rect(0, 0, width, height)
    }

    /// Traversal of `[left, left + width) x [top, top + height)`.
    #[inline]
    pub const fn rect(left: u32, top: u32, width: u32, height: u32) -> Self {
        let right = left + width;
        // An empty row makes the whole rectangle empty.
        let bottom = if width == 0 { top } else { top + height };
        Self {
            left,
            right,
            bottom,
            x: left,
            y: top,
        }
    }

    fn remaining(&self) -> usize {
        if self.y >= self.bottom {
            return 0;
        }
        let row_size = (self.right - self.left) as usize;
        let full_rows = (self.bottom - self.y - 1) as usize;
        full_rows * row_size + (self.right - self.x) as usize
    }
}

impl Iterator for GridTraversal {
    type Item = (u32, u32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.bottom {
            return None;
        }
        let result = (self.x, self.y);
        self.x += 1;
        if self.x >= self.right {
            self.x = self.left;
            self.y += 1;
        }
        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridTraversal {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_rect_in_row_major_order() {
        let coords: Vec<_> = GridTraversal::rect(1, 2, 2, 2).collect();
        assert_eq!(coords, [(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn empty_rect() {
        assert_eq!(GridTraversal::new(0, 5).count(), 0);
        assert_eq!(GridTraversal::new(5, 0).count(), 0);
    }

    #[test]
    fn exact_size() {
        let mut iter = GridTraversal::new(3, 4);
        assert_eq!(iter.len(), 12);
        iter.next();
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
    }
}
