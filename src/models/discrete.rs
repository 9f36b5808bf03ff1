//! Discrete-symbol emissions from a fixed log-probability table.

use crate::error::{Error, Result};
use crate::model::State;
use crate::traits::EmissionModel;

/// `log_e[symbol][state]` for symbols `0..alphabet_size()`.
///
/// Observations are zero-based symbol indices; a six-faced die uses 0..=5
/// for faces 1..=6.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteEmissions {
    log_e: Vec<[f64; 2]>,
}

impl DiscreteEmissions {
    /// Build from a table of log-probabilities.
    pub fn from_log(log_e: Vec<[f64; 2]>) -> Self {
        Self { log_e }
    }

    /// Build from linear probabilities, taking `ln` of each entry.
    pub fn from_probabilities(p: &[[f64; 2]]) -> Self {
        Self {
            log_e: p.iter().map(|row| row.map(f64::ln)).collect(),
        }
    }

    pub fn alphabet_size(&self) -> usize {
        self.log_e.len()
    }
}

impl EmissionModel for DiscreteEmissions {
    type Observation = usize;

    #[inline]
    fn log_prob(&self, symbol: &usize, state: State) -> f64 {
        self.log_e[*symbol][state.index()]
    }

    fn check(&self, index: usize, symbol: &usize) -> Result<()> {
        if *symbol < self.log_e.len() {
            Ok(())
        } else {
            Err(Error::ObservationOutOfDomain {
                index,
                value: *symbol,
                alphabet: self.log_e.len(),
            })
        }
    }
}
