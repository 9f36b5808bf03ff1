use crate::decoder::{EmissionAlignment, ViterbiDecoder};
use crate::model::{State, TransitionMatrix};
use crate::traits::EmissionModel;

pub struct DecoderBuilder<E> {
    transitions: TransitionMatrix,
    emissions: E,
    start: Option<State>,
    alignment: Option<EmissionAlignment>,
}

impl<E: EmissionModel> DecoderBuilder<E> {
    pub fn new(transitions: TransitionMatrix, emissions: E) -> Self {
        Self {
            transitions,
            emissions,
            start: None,
            alignment: None,
        }
    }
    pub fn with_start_state(mut self, start: State) -> Self {
        self.start = Some(start);
        self
    }
    pub fn with_alignment(mut self, alignment: EmissionAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
    pub fn build(self) -> ViterbiDecoder<E> {
        ViterbiDecoder::with_options(
            self.transitions,
            self.emissions,
            self.start.unwrap_or(State::Zero),
            self.alignment.unwrap_or_default(),
        )
    }
}
