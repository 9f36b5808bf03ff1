//! Hidden states and the 2x2 transition matrix.

use std::fmt;

/// One of the two hidden states.
///
/// A closed enum rather than a bare index, so a backpointer can never name a
/// state that does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    Zero,
    One,
}

/// State chosen by every argmax when both candidates score exactly the same.
pub const PREFER_STATE_ON_TIE: State = State::One;

impl State {
    /// Both states in index order.
    pub const ALL: [State; 2] = [State::Zero, State::One];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            State::Zero => 0,
            State::One => 1,
        }
    }

    /// Inverse of [`State::index`]; `None` for anything but 0 or 1.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(State::Zero),
            1 => Some(State::One),
            _ => None,
        }
    }

    /// The state that is not `self`.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            State::Zero => State::One,
            State::One => State::Zero,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Transition log-probabilities, `log_a[i][j] = ln P(next = j | current = i)`.
///
/// Rows are expected to be distributions in linear space; this is assumed,
/// not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionMatrix {
    log_a: [[f64; 2]; 2],
}

impl TransitionMatrix {
    /// Build from values that are already log-probabilities.
    pub fn from_log(log_a: [[f64; 2]; 2]) -> Self {
        Self { log_a }
    }

    /// Build from linear probabilities; each entry is passed through `ln`.
    pub fn from_probabilities(p: [[f64; 2]; 2]) -> Self {
        Self {
            log_a: p.map(|row| row.map(f64::ln)),
        }
    }

    /// `ln P(to | from)`.
    #[inline]
    pub fn log_prob(&self, from: State, to: State) -> f64 {
        self.log_a[from.index()][to.index()]
    }

    /// The whole table, `[from][to]`, in log space.
    pub fn as_log(&self) -> &[[f64; 2]; 2] {
        &self.log_a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for s in State::ALL {
            assert_eq!(State::from_index(s.index()), Some(s));
        }
        assert_eq!(State::from_index(2), None);
        assert_eq!(State::Zero.other(), State::One);
    }

    #[test]
    fn tie_policy_is_second_state() {
        assert_eq!(PREFER_STATE_ON_TIE, State::One);
    }

    #[test]
    fn probabilities_are_logged() {
        let m = TransitionMatrix::from_probabilities([[0.95, 0.05], [0.1, 0.9]]);
        assert_eq!(m.log_prob(State::Zero, State::One), 0.05f64.ln());
        assert_eq!(m.log_prob(State::One, State::One), 0.9f64.ln());

        let zero = TransitionMatrix::from_probabilities([[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(zero.log_prob(State::Zero, State::One), f64::NEG_INFINITY);
        assert_eq!(zero.log_prob(State::Zero, State::Zero), 0.0);
    }

    #[test]
    fn log_table_is_indexed_from_then_to() {
        let m = TransitionMatrix::from_probabilities([[0.95, 0.05], [0.1, 0.9]]);
        let table = m.as_log();
        assert_eq!(table[0][1], 0.05f64.ln());
        assert_eq!(table[1][0], 0.1f64.ln());
        assert_eq!(TransitionMatrix::from_log(*table), m);
    }
}
