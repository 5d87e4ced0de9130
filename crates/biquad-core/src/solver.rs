use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

use crate::coefficients::Coefficients;
use crate::error::{BiquadError, BiquadResult};
use crate::quadratic::{solve_quadratic, TRoots};

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Why a solvable equation has no real x-root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoRootsReason {
    NegativeDiscriminant,
    /// Real t-roots exist but all of them are negative.
    NegativeTRoots,
}

impl fmt::Display for NoRootsReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDiscriminant => write!(f, "negative discriminant"),
            Self::NegativeTRoots => write!(f, "all t-roots negative"),
        }
    }
}

/// Number of distinct real x-roots of a solvable equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCount {
    One,
    Two,
    Three,
    Four,
}

impl RootCount {
    /// `None` for an empty root set, or for more roots than a quartic has.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    pub fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl Serialize for RootCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get() as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    Roots { count: RootCount },
    NoRealRoots { reason: NoRootsReason },
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roots { count } => match count {
                RootCount::One => write!(f, "one root"),
                RootCount::Two => write!(f, "two roots"),
                RootCount::Three => write!(f, "three roots"),
                RootCount::Four => write!(f, "four roots"),
            },
            Self::NoRealRoots { reason } => write!(f, "no real roots ({reason})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub coefficients: Coefficients,
    pub discriminant: f64,
    pub t_roots: TRoots,
    /// Real x-roots, ascending, without duplicates.
    pub roots: Vec<f64>,
}

impl Solution {
    pub fn classification(&self) -> Classification {
        // at most two t-roots, so at most four x-roots
        match RootCount::from_len(self.roots.len()) {
            Some(count) => Classification::Roots { count },
            None if self.discriminant < 0.0 => Classification::NoRealRoots {
                reason: NoRootsReason::NegativeDiscriminant,
            },
            None => Classification::NoRealRoots {
                reason: NoRootsReason::NegativeTRoots,
            },
        }
    }

    /// Value of the quartic polynomial at each root.
    pub fn residuals(&self) -> Vec<f64> {
        self.roots
            .iter()
            .map(|&x| self.coefficients.evaluate(x))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Root mapping
// ---------------------------------------------------------------------------

/// Map t-roots back to x: `t > 0` gives `±√t`, `t == 0` gives a single `0`,
/// `t < 0` gives nothing. The result is sorted ascending and deduplicated.
pub fn map_t_roots(t_roots: &TRoots) -> Vec<f64> {
    let mut roots = Vec::with_capacity(2 * t_roots.len());
    for t in t_roots.iter() {
        if t > 0.0 {
            let x = t.sqrt();
            roots.push(-x);
            roots.push(x);
        } else if t == 0.0 {
            // -0.0 == 0.0, normalize so output never carries a signed zero
            roots.push(0.0);
        }
    }
    roots.sort_by(f64::total_cmp);
    roots.dedup();
    roots
}

impl Coefficients {
    /// Fails with [`BiquadError::NumericOverflow`] when the discriminant or a
    /// t-root leaves the finite range, which finite coefficients can still cause.
    pub fn solve(&self) -> BiquadResult<Solution> {
        let discriminant = self.discriminant();
        if !discriminant.is_finite() {
            return Err(self.overflow("discriminant"));
        }
        let t_roots = solve_quadratic(self.a(), self.b(), self.c());
        if !t_roots.is_finite() {
            return Err(self.overflow("t-root"));
        }
        let roots = map_t_roots(&t_roots);
        debug!(
            equation = %self,
            discriminant,
            t_roots = t_roots.len(),
            x_roots = roots.len(),
            "solved biquadratic"
        );
        Ok(Solution {
            coefficients: *self,
            discriminant,
            t_roots,
            roots,
        })
    }

    fn overflow(&self, quantity: &'static str) -> BiquadError {
        debug!(equation = %self, quantity, "numeric overflow");
        BiquadError::NumericOverflow {
            quantity,
            equation: self.to_string(),
        }
    }
}

/// Solve `a·x⁴ + b·x² + c = 0` over the reals.
///
/// Validation runs before any arithmetic. An equation without real roots is a
/// successful [`Solution`]; inspect [`Solution::classification`] for the cause.
pub fn solve(a: f64, b: f64, c: f64) -> BiquadResult<Solution> {
    Coefficients::new(a, b, c)?.solve()
}
