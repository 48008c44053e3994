//! Gas law solvers: Boyle, Charles, Gay-Lussac, the combined gas law and the
//! ideal gas law.
//!
//! Every solver takes all variables of its identity as `Option<f64>` slots;
//! exactly one must be `None` and the value of that missing variable is
//! returned from the closed-form single-unknown expression. Units are the
//! caller's business, the identities are ratio laws.

use thiserror::Error;

/// universal gas constant, J/(mol*K)
pub const R_J_MOL_K: f64 = 8.314;

#[derive(Debug, Error, PartialEq)]
pub enum GasLawError {
    #[error("Expected exactly one unknown, got {unknowns} of {variables} variables unset")]
    ExpectedOneUnknown { unknowns: usize, variables: usize },
}

fn expected_one(slots: &[Option<f64>]) -> GasLawError {
    GasLawError::ExpectedOneUnknown {
        unknowns: slots.iter().filter(|slot| slot.is_none()).count(),
        variables: slots.len(),
    }
}

/// Boyle's law, P1*V1 = P2*V2.
pub fn solve_boyle(
    p1: Option<f64>,
    v1: Option<f64>,
    p2: Option<f64>,
    v2: Option<f64>,
) -> Result<f64, GasLawError> {
    match (p1, v1, p2, v2) {
        (None, Some(v1), Some(p2), Some(v2)) => Ok(p2 * v2 / v1),
        (Some(p1), None, Some(p2), Some(v2)) => Ok(p2 * v2 / p1),
        (Some(p1), Some(v1), None, Some(v2)) => Ok(p1 * v1 / v2),
        (Some(p1), Some(v1), Some(p2), None) => Ok(p1 * v1 / p2),
        _ => Err(expected_one(&[p1, v1, p2, v2])),
    }
}

/// Charles' law, V1/T1 = V2/T2.
pub fn solve_charles(
    v1: Option<f64>,
    t1: Option<f64>,
    v2: Option<f64>,
    t2: Option<f64>,
) -> Result<f64, GasLawError> {
    match (v1, t1, v2, t2) {
        (None, Some(t1), Some(v2), Some(t2)) => Ok(v2 * t1 / t2),
        (Some(v1), None, Some(v2), Some(t2)) => Ok(v1 * t2 / v2),
        (Some(v1), Some(t1), None, Some(t2)) => Ok(v1 * t2 / t1),
        (Some(v1), Some(t1), Some(v2), None) => Ok(v2 * t1 / v1),
        _ => Err(expected_one(&[v1, t1, v2, t2])),
    }
}

/// Gay-Lussac's law, P1/T1 = P2/T2.
pub fn solve_gay_lussac(
    p1: Option<f64>,
    t1: Option<f64>,
    p2: Option<f64>,
    t2: Option<f64>,
) -> Result<f64, GasLawError> {
    match (p1, t1, p2, t2) {
        (None, Some(t1), Some(p2), Some(t2)) => Ok(p2 * t1 / t2),
        (Some(p1), None, Some(p2), Some(t2)) => Ok(p1 * t2 / p2),
        (Some(p1), Some(t1), None, Some(t2)) => Ok(p1 * t2 / t1),
        (Some(p1), Some(t1), Some(p2), None) => Ok(p2 * t1 / p1),
        _ => Err(expected_one(&[p1, t1, p2, t2])),
    }
}

/// Combined gas law, P1*V1/T1 = P2*V2/T2.
pub fn solve_combined(
    p1: Option<f64>,
    v1: Option<f64>,
    t1: Option<f64>,
    p2: Option<f64>,
    v2: Option<f64>,
    t2: Option<f64>,
) -> Result<f64, GasLawError> {
    match (p1, v1, t1, p2, v2, t2) {
        (None, Some(v1), Some(t1), Some(p2), Some(v2), Some(t2)) => Ok(p2 * v2 * t1 / (t2 * v1)),
        (Some(p1), None, Some(t1), Some(p2), Some(v2), Some(t2)) => Ok(p2 * v2 * t1 / (t2 * p1)),
        (Some(p1), Some(v1), None, Some(p2), Some(v2), Some(t2)) => Ok(p1 * v1 * t2 / (p2 * v2)),
        (Some(p1), Some(v1), Some(t1), None, Some(v2), Some(t2)) => Ok(p1 * v1 * t2 / (t1 * v2)),
        (Some(p1), Some(v1), Some(t1), Some(p2), None, Some(t2)) => Ok(p1 * v1 * t2 / (t1 * p2)),
        (Some(p1), Some(v1), Some(t1), Some(p2), Some(v2), None) => Ok(p2 * v2 * t1 / (p1 * v1)),
        _ => Err(expected_one(&[p1, v1, t1, p2, v2, t2])),
    }
}

/// Ideal gas law, P*V = n*R*T. The gas constant occupies a regular slot so
/// it can be solved for or supplied in other units; see [`R_J_MOL_K`].
pub fn solve_ideal(
    p: Option<f64>,
    v: Option<f64>,
    n: Option<f64>,
    r: Option<f64>,
    t: Option<f64>,
) -> Result<f64, GasLawError> {
    match (p, v, n, r, t) {
        (None, Some(v), Some(n), Some(r), Some(t)) => Ok(n * r * t / v),
        (Some(p), None, Some(n), Some(r), Some(t)) => Ok(n * r * t / p),
        (Some(p), Some(v), None, Some(r), Some(t)) => Ok(p * v / (r * t)),
        (Some(p), Some(v), Some(n), None, Some(t)) => Ok(p * v / (n * t)),
        (Some(p), Some(v), Some(n), Some(r), None) => Ok(p * v / (n * r)),
        _ => Err(expected_one(&[p, v, n, r, t])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_boyle_law() {
        let solution = solve_boyle(Some(5.0), Some(5.0), Some(3.0), None).unwrap();
        assert_relative_eq!(solution, 25.0 / 3.0, epsilon = 1e-3);
        let p1 = solve_boyle(None, Some(5.0), Some(3.0), Some(25.0 / 3.0)).unwrap();
        assert_relative_eq!(p1, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_charles_law() {
        let solution = solve_charles(Some(20.0), Some(60.0), Some(1.0), None).unwrap();
        assert_relative_eq!(solution, 3.0, epsilon = 1e-3);
    }

    #[test]
    fn test_gay_lussac_law() {
        let solution = solve_gay_lussac(Some(10.0), Some(260.0), Some(0.5), None).unwrap();
        assert_relative_eq!(solution, 13.0, epsilon = 1e-3);
    }

    #[test]
    fn test_combined_gas_law() {
        let solution =
            solve_combined(Some(1.0), Some(1.0), Some(1.0), Some(5.0), Some(3.0), None).unwrap();
        assert_relative_eq!(solution, 15.0, epsilon = 1e-3);
    }

    #[test]
    fn test_ideal_gas_law() {
        let solution = solve_ideal(Some(5.0), Some(7.0), Some(1.0), Some(2.0), None).unwrap();
        assert_relative_eq!(solution, 17.5, epsilon = 1e-3);
        // n from standard conditions: 101325 Pa, 22.414 L in m^3, 273.15 K
        let n = solve_ideal(
            Some(101_325.0),
            Some(0.022414),
            None,
            Some(R_J_MOL_K),
            Some(273.15),
        )
        .unwrap();
        assert_relative_eq!(n, 1.0, epsilon = 1e-2);
    }

    #[test]
    fn test_exactly_one_unknown() {
        assert_eq!(
            solve_boyle(Some(1.0), Some(1.0), Some(1.0), Some(1.0)),
            Err(GasLawError::ExpectedOneUnknown {
                unknowns: 0,
                variables: 4
            })
        );
        assert_eq!(
            solve_boyle(None, None, Some(1.0), Some(1.0)),
            Err(GasLawError::ExpectedOneUnknown {
                unknowns: 2,
                variables: 4
            })
        );
        assert_eq!(
            solve_ideal(None, None, None, None, None),
            Err(GasLawError::ExpectedOneUnknown {
                unknowns: 5,
                variables: 5
            })
        );
    }
}
