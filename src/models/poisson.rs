//! Poisson-distributed count emissions.
//!
//! `ln P(x | s) = x ln(lambda_s) - lambda_s - ln(x!)`, evaluated directly in
//! log space. Neither `lambda^x` nor `x!` is ever formed, so large counts do
//! not overflow.

use crate::error::{Error, Result};
use crate::model::State;
use crate::traits::EmissionModel;
use crate::utils::log_factorial;

/// One Poisson rate per hidden state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonEmissions {
    rates: [f64; 2],
    log_rates: [f64; 2],
}

impl PoissonEmissions {
    /// # Errors
    /// [`Error::InvalidRate`] unless both rates are finite and positive.
    pub fn new(rates: [f64; 2]) -> Result<Self> {
        for (state, &rate) in rates.iter().enumerate() {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(Error::InvalidRate { state, rate });
            }
        }
        Ok(Self::from_valid_rates(rates))
    }

    pub(crate) fn from_valid_rates(rates: [f64; 2]) -> Self {
        Self {
            rates,
            log_rates: rates.map(f64::ln),
        }
    }

    pub fn rate(&self, state: State) -> f64 {
        self.rates[state.index()]
    }
}

impl EmissionModel for PoissonEmissions {
    type Observation = u64;

    #[inline]
    fn log_prob(&self, count: &u64, state: State) -> f64 {
        let s = state.index();
        let k = *count;
        // 0 * ln(lambda) is 0; skip the multiply so a count of 0 stays exact.
        let kl = if k == 0 {
            0.0
        } else {
            k as f64 * self.log_rates[s]
        };
        kl - self.rates[s] - log_factorial(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_pmf(k: u64, lambda: f64) -> f64 {
        let fact: f64 = (1..=k).map(|i| i as f64).product();
        lambda.powi(k as i32) * (-lambda).exp() / fact
    }

    #[test]
    fn zero_count_is_exp_minus_lambda() {
        let e = PoissonEmissions::new([1.8234, 5.7812]).unwrap();
        assert_eq!(e.log_prob(&0, State::Zero), -1.8234);
        assert_eq!(e.log_prob(&0, State::One), -5.7812);
    }

    #[test]
    fn matches_naive_pmf_for_small_counts() {
        let e = PoissonEmissions::new([1.8234, 5.7812]).unwrap();
        for k in 0..15u64 {
            for s in State::ALL {
                let want = naive_pmf(k, e.rate(s)).ln();
                let got = e.log_prob(&k, s);
                assert!((got - want).abs() < 1e-10, "k={k} s={s}: {got} vs {want}");
            }
        }
    }

    #[test]
    fn large_counts_stay_finite() {
        let e = PoissonEmissions::new([1.8234, 5.7812]).unwrap();
        let v = e.log_prob(&500, State::One);
        assert!(v.is_finite());
        assert!(v < e.log_prob(&6, State::One));
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(matches!(
            PoissonEmissions::new([0.0, 1.0]),
            Err(Error::InvalidRate { state: 0, .. })
        ));
        assert!(matches!(
            PoissonEmissions::new([1.0, f64::NAN]),
            Err(Error::InvalidRate { state: 1, .. })
        ));
        assert!(PoissonEmissions::new([1.0, -2.0]).is_err());
    }
}
