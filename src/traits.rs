//! The emission seam between the decoder and a concrete model.
//!
//! The decoder only ever asks one question of an emission model: how likely
//! is this observation under this state, in log space. Implement
//! [`EmissionModel`] to plug a new observation family into
//! [`ViterbiDecoder`](crate::decoder::ViterbiDecoder).

use crate::error::Result;
use crate::model::State;

/// Log-likelihood of an observation under a hidden state.
///
/// Implementations must be pure: the same `(observation, state)` pair always
/// yields the same value.
pub trait EmissionModel {
    /// A single observation (a count, a die face, ...).
    type Observation;

    /// `ln P(observation | state)`.
    ///
    /// Callers must pass observations that [`check`](Self::check) accepts;
    /// anything else is a contract violation and may panic.
    fn log_prob(&self, observation: &Self::Observation, state: State) -> f64;

    /// Reject an observation the model has no probability for.
    ///
    /// `index` is the observation's position, for error reporting. The
    /// decoder runs this over the whole sequence before it allocates
    /// anything.
    fn check(&self, index: usize, observation: &Self::Observation) -> Result<()> {
        let _ = (index, observation);
        Ok(())
    }
}

impl<E: EmissionModel + ?Sized> EmissionModel for &E {
    type Observation = E::Observation;

    #[inline]
    fn log_prob(&self, observation: &Self::Observation, state: State) -> f64 {
        (**self).log_prob(observation, state)
    }

    fn check(&self, index: usize, observation: &Self::Observation) -> Result<()> {
        (**self).check(index, observation)
    }
}
