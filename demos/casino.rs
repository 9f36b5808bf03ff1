//! Example: the occasionally dishonest casino.
//!
//! Run with:
//! `cargo run --example casino`

use hmm_viterbi::io::{render_path, StateLabels};
use hmm_viterbi::models::presets;
use hmm_viterbi::ViterbiDecoder;

fn main() {
    // Two states: 0 = fair die, 1 = loaded die (six comes up half the time).
    let (transitions, emissions) = presets::casino();
    let decoder = ViterbiDecoder::new(transitions, emissions);

    // Faces as rolled, 1-based.
    let rolls = [
        3, 1, 5, 1, 2, 4, 6, 3, 2, 1, 6, 6, 4, 6, 6, 6, 6, 5, 6, 6, 6, 2, 1, 4, 3, 2, 5, 1, 3, 4,
    ];
    let obs: Vec<usize> = rolls.iter().map(|f| f - 1).collect();

    let decoding = match decoder.decode(&obs) {
        Ok(d) => d,
        Err(err) => {
            eprintln!("decode failed: {err}");
            std::process::exit(1);
        }
    };

    println!("Best path log-probability: {}", decoding.log_prob());
    let faces: String = rolls.iter().map(|f| f.to_string()).collect();
    println!("Rolls:  {faces}");
    println!(
        "States: {}",
        render_path(decoding.path(), StateLabels::Letters, None)
    );
}
