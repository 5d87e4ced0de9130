pub mod coefficients;
pub mod error;
pub mod quadratic;
pub mod solver;

pub use coefficients::{parse_coefficient, validate, CoefficientName, Coefficients};
pub use error::{BiquadError, BiquadResult};
pub use quadratic::{discriminant, solve_quadratic, TRoots};
pub use solver::{map_t_roots, solve, Classification, NoRootsReason, RootCount, Solution};

#[cfg(test)]
mod tests {
    use super::*;

    static VALUES: [f64; 11] = [-13.0, -9.0, -5.0, -2.5, -1.0, 0.0, 0.5, 1.0, 3.0, 6.0, 36.0];

    fn grid() -> impl Iterator<Item = (f64, f64, f64)> {
        VALUES.iter().flat_map(|&a| {
            VALUES
                .iter()
                .flat_map(move |&b| VALUES.iter().map(move |&c| (a, b, c)))
        })
    }

    #[test]
    fn test_roots_satisfy_equation() {
        for (a, b, c) in grid().filter(|&(a, _, _)| a != 0.0) {
            let sol = solve(a, b, c).unwrap();
            let scale = a.abs().max(b.abs()).max(c.abs());
            for (x, r) in sol.roots.iter().zip(sol.residuals()) {
                let tol = 1e-9 * scale * (1.0 + x.powi(4));
                assert!(r.abs() <= tol, "({a}, {b}, {c}): x={x} residual={r}");
            }
        }
    }

    #[test]
    fn test_root_count_parity() {
        for (a, b, c) in grid().filter(|&(a, _, _)| a != 0.0) {
            let roots = solve(a, b, c).unwrap().roots;
            assert!(roots.len() <= 4, "({a}, {b}, {c}): {roots:?}");
            let zeros = roots.iter().filter(|&&x| x == 0.0).count();
            assert!(zeros <= 1);
            if zeros == 0 {
                assert_eq!(roots.len() % 2, 0, "({a}, {b}, {c}): {roots:?}");
            } else {
                assert_eq!(roots.len() % 2, 1, "({a}, {b}, {c}): {roots:?}");
            }
        }
    }

    #[test]
    fn test_roots_symmetric_and_sorted() {
        for (a, b, c) in grid().filter(|&(a, _, _)| a != 0.0) {
            let roots = solve(a, b, c).unwrap().roots;
            assert!(roots.windows(2).all(|w| w[0] < w[1]), "{roots:?}");
            for &r in roots.iter().filter(|&&r| r != 0.0) {
                assert!(roots.contains(&-r), "({a}, {b}, {c}): {roots:?}");
            }
        }
    }

    #[test]
    fn test_no_roots_implies_reason() {
        for (a, b, c) in grid().filter(|&(a, _, _)| a != 0.0) {
            let sol = solve(a, b, c).unwrap();
            match sol.classification() {
                Classification::Roots { count } => assert_eq!(count.get(), sol.roots.len()),
                Classification::NoRealRoots { reason } => {
                    assert!(sol.roots.is_empty());
                    let expected = if sol.discriminant < 0.0 {
                        NoRootsReason::NegativeDiscriminant
                    } else {
                        NoRootsReason::NegativeTRoots
                    };
                    assert_eq!(reason, expected);
                    assert!(sol.t_roots.iter().all(|t| t < 0.0));
                }
            }
        }
    }

    #[test]
    fn test_zero_a_always_degenerate() {
        for &b in &VALUES {
            for &c in &VALUES {
                assert_eq!(solve(0.0, b, c), Err(BiquadError::DegenerateEquation));
            }
        }
    }

    #[test]
    fn test_extreme_magnitudes_fail_or_stay_finite() {
        let magnitudes = [-1e200, -1e150, -1.0, 1e-300, 1.0, 1e150, 1e200];
        for &a in &magnitudes {
            for &b in &magnitudes {
                for &c in &magnitudes {
                    match solve(a, b, c) {
                        Ok(sol) => {
                            assert!(sol.discriminant.is_finite());
                            assert!(sol.t_roots.is_finite());
                            assert!(sol.roots.iter().all(|x| x.is_finite()));
                        }
                        Err(e) => assert_eq!(e.code(), "numeric_overflow", "({a}, {b}, {c})"),
                    }
                }
            }
        }
    }
}
