//! Plain-text input and output around the decoder.
//!
//! Sequence files hold whitespace- or newline-delimited values. Reference
//! files hold one state per record, either as letters (`F`/`L`) or as
//! digits (`1`/`2`, optionally preceded by a position column). None of this
//! is needed to call the decoder; it is what the `viterbi` binary uses.

use crate::error::{Error, Result};
use crate::model::State;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How states are written in reference files and rendered output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateLabels {
    /// `F` (fair) for state 0, `L` (loaded) for state 1.
    Letters,
    /// `1` for state 0, `2` for state 1.
    Digits,
}

impl StateLabels {
    pub fn label(self, state: State) -> char {
        match (self, state) {
            (StateLabels::Letters, State::Zero) => 'F',
            (StateLabels::Letters, State::One) => 'L',
            (StateLabels::Digits, State::Zero) => '1',
            (StateLabels::Digits, State::One) => '2',
        }
    }

    /// Parse a single label; letters are case-insensitive.
    pub fn parse(self, label: &str) -> Option<State> {
        match self {
            StateLabels::Letters => match label {
                "F" | "f" => Some(State::Zero),
                "L" | "l" => Some(State::One),
                _ => None,
            },
            StateLabels::Digits => match label {
                "1" => Some(State::Zero),
                "2" => Some(State::One),
                _ => None,
            },
        }
    }
}

/// Read a whole file, attaching the path to any I/O error.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse every whitespace-separated token of `text` as a `T`.
pub fn parse_observations<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let mut out = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<T>().map_err(|e| Error::Parse {
                line: line_no + 1,
                token: token.to_string(),
                reason: e.to_string(),
            })?;
            out.push(value);
        }
    }
    Ok(out)
}

/// Parse die faces written 1-based and return them as zero-based symbols.
///
/// A face of 0 is a parse error; faces above the model's alphabet are left
/// for the emission model to reject.
pub fn parse_die_rolls(text: &str) -> Result<Vec<usize>> {
    let mut out = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let face = token.parse::<usize>().map_err(|e| Error::Parse {
                line: line_no + 1,
                token: token.to_string(),
                reason: e.to_string(),
            })?;
            if face == 0 {
                return Err(Error::Parse {
                    line: line_no + 1,
                    token: token.to_string(),
                    reason: "die faces are numbered from 1".to_string(),
                });
            }
            out.push(face - 1);
        }
    }
    Ok(out)
}

/// Parse a reference state sequence.
///
/// With [`StateLabels::Letters`] every non-whitespace character is one state,
/// so both one-letter-per-line files and `FFFLLF` runs work. With
/// [`StateLabels::Digits`] each non-blank line is one record and its last
/// token is the state, which accepts both `2` and `17 2`.
pub fn parse_reference(text: &str, labels: StateLabels) -> Result<Vec<State>> {
    let mut out = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        match labels {
            StateLabels::Letters => {
                for ch in line.chars().filter(|c| !c.is_whitespace()) {
                    let mut buf = [0u8; 4];
                    let label = ch.encode_utf8(&mut buf);
                    let state = labels.parse(label).ok_or_else(|| Error::UnknownStateLabel {
                        line: line_no + 1,
                        label: label.to_string(),
                    })?;
                    out.push(state);
                }
            }
            StateLabels::Digits => {
                if let Some(label) = line.split_whitespace().last() {
                    let state = labels.parse(label).ok_or_else(|| Error::UnknownStateLabel {
                        line: line_no + 1,
                        label: label.to_string(),
                    })?;
                    out.push(state);
                }
            }
        }
    }
    Ok(out)
}

/// Render a path as labels, breaking the line every `wrap` characters.
///
/// `None` or `Some(0)` keeps everything on one line. No trailing newline.
pub fn render_path(path: &[State], labels: StateLabels, wrap: Option<usize>) -> String {
    let width = wrap.filter(|&w| w > 0);
    let breaks = width.map_or(0, |w| path.len().saturating_sub(1) / w);
    let mut out = String::with_capacity(path.len() + breaks);
    for (i, &state) in path.iter().enumerate() {
        if let Some(w) = width {
            if i > 0 && i % w == 0 {
                out.push('\n');
            }
        }
        out.push(labels.label(state));
    }
    out
}

/// How many positions of a decoded path match a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agreement {
    pub matches: usize,
    pub total: usize,
}

impl Agreement {
    /// Fraction in `[0, 1]`; 1.0 for two empty sequences.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.matches as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({:.1}%)",
            self.matches,
            self.total,
            self.fraction() * 100.0
        )
    }
}

/// Compare a decoded path with a reference of the same length.
///
/// # Errors
/// [`Error::LengthMismatch`] when the lengths differ.
pub fn compare(path: &[State], reference: &[State]) -> Result<Agreement> {
    if path.len() != reference.len() {
        return Err(Error::LengthMismatch {
            expected: path.len(),
            found: reference.len(),
        });
    }
    let matches = path
        .iter()
        .zip(reference)
        .filter(|(a, b)| a == b)
        .count();
    Ok(Agreement {
        matches,
        total: path.len(),
    })
}
