//! Ready-made two-state models.

use crate::model::TransitionMatrix;
use crate::models::discrete::DiscreteEmissions;
use crate::models::poisson::PoissonEmissions;

/// Fair/loaded switching probabilities of the occasionally dishonest casino
/// (Durbin et al., *Biological Sequence Analysis*, p. 54).
pub const CASINO_TRANSITIONS: [[f64; 2]; 2] = [[0.95, 0.05], [0.1, 0.9]];

/// Face probabilities, `[face][state]`: state 0 is the fair die, state 1 the
/// loaded one that shows a six half the time.
pub const CASINO_FACES: [[f64; 2]; 6] = [
    [1.0 / 6.0, 0.1],
    [1.0 / 6.0, 0.1],
    [1.0 / 6.0, 0.1],
    [1.0 / 6.0, 0.1],
    [1.0 / 6.0, 0.1],
    [1.0 / 6.0, 0.5],
];

pub const POISSON_TRANSITIONS: [[f64; 2]; 2] = [[0.9551, 0.0449], [0.0880, 0.9120]];

/// Per-state Poisson rates (low-count state 0, high-count state 1).
pub const POISSON_RATES: [f64; 2] = [1.8234, 5.7812];

/// The occasionally dishonest casino. Observations are zero-based faces.
pub fn casino() -> (TransitionMatrix, DiscreteEmissions) {
    (
        TransitionMatrix::from_probabilities(CASINO_TRANSITIONS),
        DiscreteEmissions::from_probabilities(&CASINO_FACES),
    )
}

/// Two-rate Poisson count model.
pub fn poisson() -> (TransitionMatrix, PoissonEmissions) {
    (
        TransitionMatrix::from_probabilities(POISSON_TRANSITIONS),
        PoissonEmissions::from_valid_rates(POISSON_RATES),
    )
}
