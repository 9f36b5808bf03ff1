//! Small numeric helpers shared by the decoder and the emission models.

use crate::model::{State, PREFER_STATE_ON_TIE};
use std::f64::consts::PI;

/// Pick the better of two candidate scores, one per predecessor state.
///
/// Returns the winning state and its score. `score_zero > score_one` picks
/// [`State::Zero`], `score_zero < score_one` picks [`State::One`], and an
/// exact tie goes to [`PREFER_STATE_ON_TIE`]. Two `-inf` scores count as a
/// tie.
#[inline]
pub fn argmax(score_zero: f64, score_one: f64) -> (State, f64) {
    if score_zero > score_one {
        (State::Zero, score_zero)
    } else if score_zero < score_one {
        (State::One, score_one)
    } else {
        let winner = PREFER_STATE_ON_TIE;
        let score = match winner {
            State::Zero => score_zero,
            State::One => score_one,
        };
        (winner, score)
    }
}

const LANCZOS_G: f64 = 7.0;
#[allow(clippy::excessive_precision)]
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the Gamma function for `z > 0`.
///
/// Lanczos approximation (g = 7, n = 9) with the reflection formula below
/// 0.5. Returns NaN for non-positive integers and NaN input.
pub fn log_gamma(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z == f64::INFINITY {
        return f64::INFINITY;
    }
    if z <= 0.0 && z == z.floor() {
        return f64::NAN;
    }
    if z < 0.5 {
        return PI.ln() - (PI * z).sin().abs().ln() - log_gamma(1.0 - z);
    }

    let z = z - 1.0;
    let mut x = LANCZOS_COEFFS[0];
    for (i, &c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        x += c / (z + i as f64);
    }
    let t = z + LANCZOS_G + 0.5;
    0.5 * (2.0 * PI).ln() + (z + 0.5) * t.ln() - t + x.ln()
}

/// `ln(k!)` via [`log_gamma`]; exact `0.0` for `k` of 0 and 1.
#[inline]
pub fn log_factorial(k: u64) -> f64 {
    if k < 2 {
        0.0
    } else {
        log_gamma(k as f64 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + b.abs())
    }

    #[test]
    fn argmax_strict_order() {
        assert_eq!(argmax(-1.0, -2.0), (State::Zero, -1.0));
        assert_eq!(argmax(-3.0, -2.0), (State::One, -2.0));
    }

    #[test]
    fn argmax_ties_go_to_preferred_state() {
        assert_eq!(argmax(-1.5, -1.5).0, PREFER_STATE_ON_TIE);
        let (s, v) = argmax(f64::NEG_INFINITY, f64::NEG_INFINITY);
        assert_eq!(s, PREFER_STATE_ON_TIE);
        assert_eq!(v, f64::NEG_INFINITY);
    }

    #[test]
    fn argmax_beats_negative_infinity() {
        assert_eq!(argmax(-700.0, f64::NEG_INFINITY).0, State::Zero);
        assert_eq!(argmax(f64::NEG_INFINITY, -700.0).0, State::One);
    }

    #[test]
    fn log_gamma_small_integers() {
        assert!(approx_eq(log_gamma(1.0), 0.0, 1e-12));
        assert!(approx_eq(log_gamma(2.0), 0.0, 1e-12));
        assert!(approx_eq(log_gamma(3.0), 2.0f64.ln(), 1e-12));
        assert!(approx_eq(log_gamma(6.0), 120.0f64.ln(), 1e-12));
    }

    #[test]
    fn log_gamma_half() {
        assert!(approx_eq(log_gamma(0.5), PI.sqrt().ln(), 1e-12));
    }

    #[test]
    fn log_gamma_poles_are_nan() {
        assert!(log_gamma(0.0).is_nan());
        assert!(log_gamma(-3.0).is_nan());
        assert!(log_gamma(f64::NAN).is_nan());
    }

    #[test]
    fn log_factorial_matches_product() {
        let mut acc = 0.0f64;
        for k in 1..=20u64 {
            acc += (k as f64).ln();
            assert!(approx_eq(log_factorial(k), acc, 1e-10), "k={k}");
        }
        assert_eq!(log_factorial(0), 0.0);
    }

    #[test]
    fn log_factorial_large_is_finite() {
        // 200! overflows f64, its log does not.
        let v = log_factorial(200);
        assert!(v.is_finite());
        assert!(approx_eq(v, 863.231_987_192_405_4, 1e-9));
    }
}
