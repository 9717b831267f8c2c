use serde::{Deserialize, Serialize};

/// Triangular membership function defined by its three control points.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub left: f64,
    pub peak: f64,
    pub right: f64,
}

impl Triangle {
    /// # Panics
    /// Panics unless `left <= peak <= right`.
    #[must_use]
    pub fn new(left: f64, peak: f64, right: f64) -> Self {
        assert!(
            left <= peak && peak <= right,
            "triangle control points must be ordered: {left} <= {peak} <= {right}"
        );
        Self { left, peak, right }
    }

    #[must_use]
    pub fn from_points(points: [f64; 3]) -> Self {
        Self::new(points[0], points[1], points[2])
    }

    /// Degree of membership of `x`, in `[0, 1]`.
    ///
    /// Zero outside `[left, right]`, one at the peak, linear in between.
    /// A collapsed edge (`left == peak` or `peak == right`) evaluates as a
    /// step instead of dividing by zero.
    #[must_use]
    pub fn degree(self, x: f64) -> f64 {
        if x < self.left || x > self.right {
            return 0.0;
        }
        if x <= self.peak {
            if self.peak == self.left {
                1.0
            } else {
                (x - self.left) / (self.peak - self.left)
            }
        } else if self.right == self.peak {
            1.0
        } else {
            (self.right - x) / (self.right - self.peak)
        }
    }
}
