use serde_json::{json, Value};

use biquad_core::{BiquadError, Solution};

/// Digits beyond this add nothing to an f64.
pub const MAX_PRECISION: usize = 17;

/// Zero is printed bare, without sign or trailing decimals.
fn format_root(x: f64, precision: usize) -> String {
    if x == 0.0 {
        "0".into()
    } else {
        format!("{x:.precision$}")
    }
}

pub fn format_text(solution: &Solution, precision: usize, verify: bool) -> String {
    let precision = precision.min(MAX_PRECISION);
    let mut out = String::new();
    out.push_str(&format!("Equation: {}\n", solution.coefficients));
    out.push_str(&format!("Result:   {}\n", solution.classification()));

    let residuals = solution.residuals();
    for (i, (x, r)) in solution.roots.iter().zip(&residuals).enumerate() {
        out.push_str(&format!("Root {}: {}", i + 1, format_root(*x, precision)));
        if verify {
            out.push_str(&format!("  (residual {r:.3e})"));
        }
        out.push('\n');
    }
    out
}

pub fn format_json(solution: &Solution, verify: bool) -> Value {
    let mut value = json!({
        "coefficients": solution.coefficients,
        "discriminant": solution.discriminant,
        "t_roots": solution.t_roots,
        "roots": solution.roots,
        "classification": solution.classification(),
    });
    if verify {
        value["residuals"] = json!(solution.residuals());
    }
    value
}

pub fn format_error_json(err: &BiquadError) -> Value {
    json!({
        "error": {
            "code": err.code(),
            "message": err.to_string(),
        }
    })
}
