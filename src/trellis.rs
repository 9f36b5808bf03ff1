//! Score and backpointer tables filled by the forward pass.
//!
//! Both tables are 2 x n, stored as one row per state. Columns are appended
//! in order and never touched again; the only way to obtain a `Trellis` from
//! outside the crate is through a finished [`Decoding`](crate::decoder::Decoding).

use crate::model::State;

#[derive(Clone, Debug, PartialEq)]
pub struct Trellis {
    /// `scores[s][i]`: best log-probability of any path ending in `s` at `i`.
    scores: [Vec<f64>; 2],
    /// `backpointers[s][i]`: predecessor of `s` on that best path.
    backpointers: [Vec<State>; 2],
}

impl Trellis {
    /// Allocate room for `len` columns and write column 0.
    ///
    /// `start` gets log-probability 0, the other state `-inf`. Column 0
    /// backpointers both name `start`.
    pub(crate) fn new(len: usize, start: State) -> Self {
        let mut scores = [Vec::with_capacity(len), Vec::with_capacity(len)];
        let mut backpointers = [Vec::with_capacity(len), Vec::with_capacity(len)];
        scores[start.index()].push(0.0);
        scores[start.other().index()].push(f64::NEG_INFINITY);
        backpointers[0].push(start);
        backpointers[1].push(start);
        Self {
            scores,
            backpointers,
        }
    }

    /// Append the next column. `scores` and `from` are indexed by state.
    #[inline]
    pub(crate) fn push_column(&mut self, scores: [f64; 2], from: [State; 2]) {
        for s in 0..2 {
            self.scores[s].push(scores[s]);
            self.backpointers[s].push(from[s]);
        }
    }

    /// Number of columns (observations) covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.scores[0].len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `V[state][i]`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn score(&self, state: State, i: usize) -> f64 {
        self.scores[state.index()][i]
    }

    /// `ptr[state][i]`.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn backpointer(&self, state: State, i: usize) -> State {
        self.backpointers[state.index()][i]
    }

    /// Whole score row for one state.
    pub fn scores(&self, state: State) -> &[f64] {
        &self.scores[state.index()]
    }

    /// Whole backpointer row for one state.
    pub fn backpointers(&self, state: State) -> &[State] {
        &self.backpointers[state.index()]
    }
}
