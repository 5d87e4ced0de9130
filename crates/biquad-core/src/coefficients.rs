use serde::Serialize;
use std::fmt;

use crate::error::{BiquadError, BiquadResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoefficientName {
    A,
    B,
    C,
}

impl fmt::Display for CoefficientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

/// Check that `(a, b, c)` describe a solvable biquadratic equation.
///
/// Non-finite values are rejected first, in A, B, C order, then a vanishing
/// quartic term. Comparison against zero is exact, so `-0.0` is degenerate too.
pub fn validate(a: f64, b: f64, c: f64) -> BiquadResult<()> {
    for (name, value) in [
        (CoefficientName::A, a),
        (CoefficientName::B, b),
        (CoefficientName::C, c),
    ] {
        if !value.is_finite() {
            return Err(BiquadError::InvalidCoefficient {
                name,
                value: value.to_string(),
            });
        }
    }

    if a == 0.0 {
        return Err(BiquadError::DegenerateEquation);
    }

    Ok(())
}

/// Parse a single coefficient from user-supplied text.
pub fn parse_coefficient(name: CoefficientName, text: &str) -> BiquadResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| BiquadError::InvalidCoefficient {
            name,
            value: text.to_string(),
        })
}

/// Coefficients of `a·x⁴ + b·x² + c = 0`, all finite with `a != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> BiquadResult<Self> {
        validate(a, b, c)?;
        Ok(Self { a, b, c })
    }

    pub fn parse(a: &str, b: &str, c: &str) -> BiquadResult<Self> {
        let a = parse_coefficient(CoefficientName::A, a)?;
        let b = parse_coefficient(CoefficientName::B, b)?;
        let c = parse_coefficient(CoefficientName::C, c)?;
        Self::new(a, b, c)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn discriminant(&self) -> f64 {
        crate::quadratic::discriminant(self.a, self.b, self.c)
    }

    /// Evaluate `a·x⁴ + b·x² + c`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x2 = x * x;
        self.a * x2 * x2 + self.b * x2 + self.c
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x^4 + {}x^2 + {} = 0", self.a, self.b, self.c)
    }
}
