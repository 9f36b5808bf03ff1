//! Viterbi decoding for two-state hidden Markov models.
//!
//! Given an observation sequence, a 2x2 transition matrix and an emission
//! model, [`ViterbiDecoder`] returns the most likely hidden-state path. All
//! arithmetic is in log space.
//!
//! ## Core idea
//! 1. Pick an [`EmissionModel`]: Poisson counts or a discrete symbol table
//!    (see [`models`]), or implement the trait yourself.
//! 2. Build a [`ViterbiDecoder`] (directly or through [`DecoderBuilder`]).
//! 3. Call [`decode`](ViterbiDecoder::decode) to get the path, its score and
//!    the filled [`Trellis`].
//!
//! The chain always starts in a known state (state 0 unless configured
//! otherwise); the other state starts at log-probability `-inf`. Exact ties
//! between candidate predecessors resolve to [`PREFER_STATE_ON_TIE`].
//!
//! ## Quick start
//! ```
//! use hmm_viterbi::{models::presets, State, ViterbiDecoder};
//!
//! // Occasionally dishonest casino: state 0 is the fair die, state 1 the
//! // loaded one. Observations are zero-based faces.
//! let (transitions, emissions) = presets::casino();
//! let decoder = ViterbiDecoder::new(transitions, emissions);
//! let rolls = [0, 3, 1, 4, 2, 5, 5, 5, 5, 5, 5, 0, 0];
//! let decoding = decoder.decode(&rolls).unwrap();
//! assert_eq!(decoding.path()[0], State::Zero);
//! assert_eq!(decoding.path()[7], State::One);
//! ```
//!
//! ## Features
//! - `parallel`: [`ViterbiDecoder::decode_batch`] fans out over rayon.
//! - `tracing`: spans around the forward pass and traceback.
//! - `cli` (default): the `viterbi` binary.

pub mod builder;
pub mod decoder;
pub mod error;
pub mod io;
pub mod model;
pub mod models;
pub mod traits;
pub mod trellis;
pub mod utils;

pub use crate::builder::DecoderBuilder;
pub use crate::decoder::{Decoding, EmissionAlignment, ViterbiDecoder};
pub use crate::error::{Error, Result};
pub use crate::model::{State, TransitionMatrix, PREFER_STATE_ON_TIE};
pub use crate::traits::EmissionModel;
pub use crate::trellis::Trellis;
