//! Real roots of the substituted quadratic `a·t² + b·t + c = 0`, `t = x²`.

use serde::{Serialize, Serializer};
use tracing::trace;

/// Real roots of the quadratic in `t`. Order within `Two` is unspecified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TRoots {
    None([f64; 0]),
    /// Double root, reported once.
    One([f64; 1]),
    Two([f64; 2]),
}

impl TRoots {
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::None(x) => x,
            Self::One(x) => x,
            Self::Two(x) => x,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(f64::is_finite)
    }
}

impl Serialize for TRoots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve `a·t² + b·t + c = 0` for `a != 0`.
///
/// The double-root case is taken only when the discriminant is exactly zero.
/// Overflow is not detected here: a non-finite discriminant yields
/// non-finite roots, see [`TRoots::is_finite`].
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> TRoots {
    let d = discriminant(a, b, c);
    let roots = if d < 0.0 {
        TRoots::None([])
    } else if d == 0.0 {
        TRoots::One([-b / (2.0 * a)])
    } else {
        let sqrt_d = d.sqrt();
        TRoots::Two([(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)])
    };
    trace!(a, b, c, d, ?roots, "quadratic in t");
    roots
}
