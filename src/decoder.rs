//! Log-space Viterbi decoding for a two-state HMM.
//!
//! The decoder runs in two phases:
//! 1. A forward pass that fills the [`Trellis`] column by column.
//! 2. A traceback that follows backpointers from the best final state.
//!
//! The decoder is generic over any [`EmissionModel`]; the transition matrix
//! is always 2x2.

use crate::error::{Error, Result};
use crate::model::{State, TransitionMatrix};
use crate::traits::EmissionModel;
use crate::trellis::Trellis;
use crate::utils::argmax;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which observation scores column `i` of the trellis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmissionAlignment {
    /// Column `i` uses `observations[i]`. Observation 0 belongs to the fixed
    /// start state and only shifts every path score by the same constant, so
    /// it is not added to column 0.
    #[default]
    Aligned,
    /// Column `i` uses `observations[i - 1]`, so emissions trail states by one
    /// position and the last observation is never scored. Kept for parity
    /// with decoders that pair scores this way.
    Lagged,
}

/// Viterbi decoder for a fixed model.
///
/// Typical usage:
/// ```
/// use hmm_viterbi::models::presets;
/// use hmm_viterbi::{State, ViterbiDecoder};
///
/// let (transitions, emissions) = presets::casino();
/// let decoder = ViterbiDecoder::new(transitions, emissions);
/// let rolls = [0, 2, 5, 5, 5, 5, 5, 5, 5, 5];
/// let decoding = decoder.decode(&rolls).unwrap();
/// assert_eq!(decoding.path().len(), rolls.len());
/// assert_eq!(decoding.path()[0], State::Zero);
/// ```
#[derive(Clone, Debug)]
pub struct ViterbiDecoder<E> {
    transitions: TransitionMatrix,
    emissions: E,
    start: State,
    alignment: EmissionAlignment,
}

/// Result of a successful decode.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoding {
    path: Vec<State>,
    log_prob: f64,
    trellis: Trellis,
}

impl Decoding {
    /// Most likely state for each observation.
    pub fn path(&self) -> &[State] {
        &self.path
    }

    /// Score of the best final state, `V[path[n-1]][n-1]`.
    pub fn log_prob(&self) -> f64 {
        self.log_prob
    }

    /// The completed score and backpointer tables.
    pub fn trellis(&self) -> &Trellis {
        &self.trellis
    }

    /// Consume the decoding, keeping only the path.
    pub fn into_path(self) -> Vec<State> {
        self.path
    }
}

impl<E: EmissionModel> ViterbiDecoder<E> {
    /// Decoder starting in [`State::Zero`] with [`EmissionAlignment::Aligned`].
    pub fn new(transitions: TransitionMatrix, emissions: E) -> Self {
        Self::with_options(
            transitions,
            emissions,
            State::Zero,
            EmissionAlignment::default(),
        )
    }

    /// Decoder with an explicit start state and emission alignment.
    pub fn with_options(
        transitions: TransitionMatrix,
        emissions: E,
        start: State,
        alignment: EmissionAlignment,
    ) -> Self {
        Self {
            transitions,
            emissions,
            start,
            alignment,
        }
    }

    pub fn transitions(&self) -> &TransitionMatrix {
        &self.transitions
    }

    pub fn emissions(&self) -> &E {
        &self.emissions
    }

    pub fn start_state(&self) -> State {
        self.start
    }

    pub fn alignment(&self) -> EmissionAlignment {
        self.alignment
    }

    /// Decode the most likely state path for `observations`.
    ///
    /// # Errors
    /// [`Error::EmptySequence`] for an empty slice, or whatever the emission
    /// model's [`check`](EmissionModel::check) rejects. Nothing is allocated
    /// until every observation has been checked.
    pub fn decode(&self, observations: &[E::Observation]) -> Result<Decoding> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("viterbi_decode", len = observations.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if observations.is_empty() {
            return Err(Error::EmptySequence);
        }
        for (i, obs) in observations.iter().enumerate() {
            self.emissions.check(i, obs)?;
        }

        let trellis = {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("forward_pass");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.forward(observations)
        };

        let path = {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("traceback");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            traceback(&trellis, self.start)
        };

        let last = trellis.len() - 1;
        let log_prob = trellis.score(path[last], last);

        #[cfg(feature = "tracing")]
        {
            let final_state = path[last];
            tracing::debug!(log_prob, %final_state, "decode finished");
        }

        Ok(Decoding {
            path,
            log_prob,
            trellis,
        })
    }

    /// Fill the trellis. `observations` must be non-empty.
    fn forward(&self, observations: &[E::Observation]) -> Trellis {
        let n = observations.len();
        let mut trellis = Trellis::new(n, self.start);
        let mut prev = [
            trellis.score(State::Zero, 0),
            trellis.score(State::One, 0),
        ];

        for i in 1..n {
            let obs = match self.alignment {
                EmissionAlignment::Aligned => &observations[i],
                EmissionAlignment::Lagged => &observations[i - 1],
            };
            let mut scores = [f64::NEG_INFINITY; 2];
            let mut from = [self.start; 2];
            for to in State::ALL {
                let (best_from, best) = argmax(
                    prev[0] + self.transitions.log_prob(State::Zero, to),
                    prev[1] + self.transitions.log_prob(State::One, to),
                );
                scores[to.index()] = self.emissions.log_prob(obs, to) + best;
                from[to.index()] = best_from;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(i, v0 = scores[0], v1 = scores[1], "column");

            trellis.push_column(scores, from);
            prev = scores;
        }
        trellis
    }
}

#[cfg(not(feature = "parallel"))]
impl<E: EmissionModel> ViterbiDecoder<E> {
    /// Decode several independent sequences; results keep input order.
    pub fn decode_batch<S>(&self, sequences: &[S]) -> Vec<Result<Decoding>>
    where
        S: AsRef<[E::Observation]>,
    {
        sequences.iter().map(|s| self.decode(s.as_ref())).collect()
    }
}

#[cfg(feature = "parallel")]
impl<E> ViterbiDecoder<E>
where
    E: EmissionModel + Sync,
    E::Observation: Sync,
{
    /// Decode several independent sequences on the rayon pool; results keep
    /// input order.
    pub fn decode_batch<S>(&self, sequences: &[S]) -> Vec<Result<Decoding>>
    where
        S: AsRef<[E::Observation]> + Sync,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(sequences = sequences.len(), "parallel batch decode");

        sequences
            .par_iter()
            .map(|s| self.decode(s.as_ref()))
            .collect()
    }
}

/// Walk backpointers from the best final state down to column 1.
///
/// Position 0 is always `start`, even when every path has probability zero
/// and the column-1 backpointers were settled by the tie policy.
fn traceback(trellis: &Trellis, start: State) -> Vec<State> {
    let n = trellis.len();
    let mut path = vec![start; n];
    let (last, _) = argmax(
        trellis.score(State::Zero, n - 1),
        trellis.score(State::One, n - 1),
    );
    path[n - 1] = last;
    for i in (1..n - 1).rev() {
        path[i] = trellis.backpointer(path[i + 1], i + 1);
    }
    path[0] = start;
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::discrete::DiscreteEmissions;

    fn sticky() -> TransitionMatrix {
        TransitionMatrix::from_probabilities([[0.9, 0.1], [0.1, 0.9]])
    }

    fn coin() -> DiscreteEmissions {
        DiscreteEmissions::from_probabilities(&[[0.9, 0.1], [0.1, 0.9]])
    }

    #[test]
    fn empty_sequence_is_an_error() {
        let d = ViterbiDecoder::new(sticky(), coin());
        assert!(matches!(d.decode(&[]), Err(Error::EmptySequence)));
    }

    #[test]
    fn out_of_alphabet_symbol_is_rejected_before_decoding() {
        let d = ViterbiDecoder::new(sticky(), coin());
        let err = d.decode(&[0, 1, 2]).unwrap_err();
        assert!(matches!(
            err,
            Error::ObservationOutOfDomain {
                index: 2,
                value: 2,
                alphabet: 2
            }
        ));
    }

    #[test]
    fn single_observation_yields_start_state() {
        for start in State::ALL {
            let d = ViterbiDecoder::with_options(
                sticky(),
                coin(),
                start,
                EmissionAlignment::Aligned,
            );
            let out = d.decode(&[1]).unwrap();
            assert_eq!(out.path(), &[start]);
            assert_eq!(out.log_prob(), 0.0);
            assert_eq!(out.trellis().len(), 1);
        }
    }

    #[test]
    fn switches_when_evidence_is_strong() {
        let d = ViterbiDecoder::new(sticky(), coin());
        let obs = [0, 0, 1, 1, 1, 1, 1];
        let out = d.decode(&obs).unwrap();
        use State::{One as L, Zero as F};
        assert_eq!(out.path(), &[F, F, L, L, L, L, L]);
    }

    #[test]
    fn lagged_alignment_shifts_emissions_by_one() {
        let obs = [0, 0, 1, 1, 1, 1, 1];
        // Lagged decoding of `obs` is aligned decoding of `obs` shifted right
        // by one; the value at position 0 is never scored.
        let mut shifted = vec![1];
        shifted.extend_from_slice(&obs[..obs.len() - 1]);
        let aligned = ViterbiDecoder::new(sticky(), coin())
            .decode(&shifted)
            .unwrap();
        let lagged =
            ViterbiDecoder::with_options(sticky(), coin(), State::Zero, EmissionAlignment::Lagged)
                .decode(&obs)
                .unwrap();
        assert_eq!(lagged, aligned);
        let e = coin();
        let t = sticky();
        assert_eq!(
            lagged.trellis().score(State::Zero, 1),
            e.log_prob(&obs[0], State::Zero) + t.log_prob(State::Zero, State::Zero)
        );
    }

    #[test]
    fn traceback_reaches_column_zero() {
        let d = ViterbiDecoder::new(sticky(), coin());
        let out = d.decode(&[1, 1, 1, 1]).unwrap();
        assert_eq!(out.path()[0], State::Zero);
        let p = out.path();
        for i in 1..p.len() {
            assert_eq!(out.trellis().backpointer(p[i], i), p[i - 1]);
        }
    }

    #[test]
    fn into_path_keeps_the_decoded_states() {
        let d = ViterbiDecoder::new(sticky(), coin());
        let out = d.decode(&[0, 0, 1, 1, 1, 1, 1]).unwrap();
        let expected = out.path().to_vec();
        assert_eq!(out.into_path(), expected);
    }

    #[test]
    fn batch_matches_single_decodes() {
        let d = ViterbiDecoder::new(sticky(), coin());
        let seqs: Vec<Vec<usize>> = vec![vec![0, 1, 1], vec![], vec![1, 1, 1, 0]];
        let batch = d.decode_batch(&seqs);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].as_ref().unwrap(), &d.decode(&seqs[0]).unwrap());
        assert!(matches!(batch[1], Err(Error::EmptySequence)));
        assert_eq!(batch[2].as_ref().unwrap(), &d.decode(&seqs[2]).unwrap());
    }
}
