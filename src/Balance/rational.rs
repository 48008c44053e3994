//! Conversion of a real-valued coefficient vector into the smallest integer
//! vector with the same proportions.
//!
//! Each coefficient is replaced by its best rational approximation with a
//! bounded denominator, the least common multiple of the denominators gives
//! the scale factor, and the *original* floats (not the approximations) are
//! multiplied by the factor and rounded. Scaling the originals keeps the
//! bounded-denominator rounding error from compounding through the product.

use num_integer::Integer;
use num_rational::Ratio;

/// Upper bound on the denominators used during integer reconstruction.
///
/// Reactions whose exact minimal coefficient ratios need a larger
/// denominator are approximated and yield a degraded integer vector; the
/// bound trades exactness on such pathological reactions for robustness
/// against floating-point noise in the least-squares solution.
pub const MAX_DENOMINATOR: i64 = 100;

// Exact (numerator, denominator) of a finite f64, with shared powers of two
// cancelled. Magnitudes below ~1e-21 collapse to 0/1: no denominator within
// any practical bound can distinguish them from zero.
fn as_integer_ratio(value: f64) -> (i128, i128) {
    debug_assert!(value.is_finite());
    if value == 0.0 {
        return (0, 1);
    }
    let bits = value.to_bits();
    let sign = if bits >> 63 == 1 { -1i128 } else { 1i128 };
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = (bits & 0x000f_ffff_ffff_ffff) as i128;
    let (mut mantissa, mut exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | 0x0010_0000_0000_0000, biased_exponent - 1075)
    };
    while exponent < 0 && mantissa % 2 == 0 {
        mantissa /= 2;
        exponent += 1;
    }
    if exponent >= 0 {
        (sign * (mantissa << exponent), 1)
    } else if exponent < -120 {
        (0, 1)
    } else {
        (sign * mantissa, 1i128 << -exponent)
    }
}

/// Closest rational to `value` with denominator at most `max_denominator`.
///
/// Walks the continued-fraction convergents of the float's exact binary
/// ratio until the denominator bound is hit, then picks the closer of the
/// two bracketing candidates by exact cross-multiplied comparison.
pub fn limit_denominator(value: f64, max_denominator: i64) -> Ratio<i64> {
    assert!(max_denominator >= 1, "max_denominator must be positive");
    let (numer, denom) = as_integer_ratio(value);
    if denom <= max_denominator as i128 {
        return Ratio::new(numer as i64, denom as i64);
    }

    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut n, mut d) = (numer, denom);
    loop {
        let a = n.div_euclid(d);
        let q2 = q0 + a * q1;
        if q2 > max_denominator as i128 {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
        (n, d) = (d, n - a * d);
        // d stays positive here: the convergent denominators grow toward the
        // exact reduced denominator, which exceeds the bound, so the loop
        // breaks first
    }

    let k = (max_denominator as i128 - q0) / q1;
    let (lower_p, lower_q) = (p0 + k * p1, q0 + k * q1);
    let (upper_p, upper_q) = (p1, q1);
    // compare |upper - value| <= |value - lower| exactly
    let upper_err = (upper_p * denom - numer * upper_q).abs() * lower_q;
    let lower_err = (numer * lower_q - lower_p * denom).abs() * upper_q;
    if upper_err <= lower_err {
        Ratio::new(upper_p as i64, upper_q as i64)
    } else {
        Ratio::new(lower_p as i64, lower_q as i64)
    }
}

/// Smallest integer vector proportional to `values`, within the denominator
/// bound. Ratios past the bound degrade as documented on [`MAX_DENOMINATOR`].
pub fn normalize_to_integers(values: &[f64], max_denominator: i64) -> Vec<i64> {
    let factor = values
        .iter()
        .map(|&value| *limit_denominator(value, max_denominator).denom())
        .fold(1i64, |lcm, denom| lcm.lcm(&denom));
    values
        .iter()
        .map(|&value| (value * factor as f64).round() as i64)
        .collect()
}
