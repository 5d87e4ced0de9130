use thiserror::Error;

use crate::coefficients::CoefficientName;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiquadError {
    #[error("degenerate: a = 0 (not a biquadratic equation)")]
    DegenerateEquation,

    #[error("invalid coefficient {name}: {value}")]
    InvalidCoefficient {
        name: CoefficientName,
        value: String,
    },

    #[error("numeric overflow: {quantity} is not finite for {equation}")]
    NumericOverflow {
        quantity: &'static str,
        equation: String,
    },
}

impl BiquadError {
    /// Stable machine-readable code, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DegenerateEquation => "degenerate_equation",
            Self::InvalidCoefficient { .. } => "invalid_coefficient",
            Self::NumericOverflow { .. } => "numeric_overflow",
        }
    }
}

pub type BiquadResult<T> = Result<T, BiquadError>;
