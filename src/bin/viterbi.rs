use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use hmm_viterbi::io::{self, StateLabels};
use hmm_viterbi::models::presets;
use hmm_viterbi::{EmissionAlignment, EmissionModel, Error, Result, State, ViterbiDecoder};
use tracing_subscriber::EnvFilter;

/// Decode the most likely hidden-state path of a two-state HMM.
#[derive(Parser, Debug)]
#[command(name = "viterbi")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Observation file: whitespace- or newline-delimited values.
    sequence: PathBuf,

    /// Optional reference state file to print and compare against.
    states: Option<PathBuf>,

    /// Model the observations are decoded against.
    #[arg(long, value_enum, default_value_t = ModelKind::Casino, env = "VITERBI_MODEL")]
    model: ModelKind,

    /// Decode only the first N observations (default: all of them).
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Which observation scores each trellis column.
    #[arg(long, value_enum, default_value_t = AlignmentArg::Aligned)]
    alignment: AlignmentArg,

    /// Wrap rendered paths at this many characters; 0 disables wrapping.
    /// Defaults to 60 for the casino model and no wrapping for poisson.
    #[arg(long)]
    wrap: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModelKind {
    /// Fair/loaded die; faces 1-6, states printed as F/L.
    Casino,
    /// Two-rate Poisson counts; states printed as 1/2.
    Poisson,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignmentArg {
    Aligned,
    Lagged,
}

impl ModelKind {
    fn default_wrap(self) -> Option<usize> {
        match self {
            ModelKind::Casino => Some(60),
            ModelKind::Poisson => None,
        }
    }
}

impl From<AlignmentArg> for EmissionAlignment {
    fn from(arg: AlignmentArg) -> Self {
        match arg {
            AlignmentArg::Aligned => EmissionAlignment::Aligned,
            AlignmentArg::Lagged => EmissionAlignment::Lagged,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("VITERBI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("hmm_viterbi={level},viterbi={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("viterbi: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Everything is decoded and rendered before anything is printed, so a
/// failure never leaves partial output on stdout.
fn run(cli: &Cli) -> Result<String> {
    let text = io::read_text(&cli.sequence)?;
    let alignment = EmissionAlignment::from(cli.alignment);

    match cli.model {
        ModelKind::Casino => {
            let rolls = io::parse_die_rolls(&text)?;
            let (transitions, emissions) = presets::casino();
            let decoder =
                ViterbiDecoder::with_options(transitions, emissions, State::Zero, alignment);
            decode_and_render(cli, &decoder, rolls, StateLabels::Letters)
        }
        ModelKind::Poisson => {
            let counts = io::parse_observations::<u64>(&text)?;
            let (transitions, emissions) = presets::poisson();
            let decoder =
                ViterbiDecoder::with_options(transitions, emissions, State::Zero, alignment);
            decode_and_render(cli, &decoder, counts, StateLabels::Digits)
        }
    }
}

fn decode_and_render<E: EmissionModel>(
    cli: &Cli,
    decoder: &ViterbiDecoder<E>,
    mut observations: Vec<E::Observation>,
    labels: StateLabels,
) -> Result<String> {
    if let Some(n) = cli.length {
        if observations.len() < n {
            return Err(Error::LengthMismatch {
                expected: n,
                found: observations.len(),
            });
        }
        observations.truncate(n);
    }

    let reference = match &cli.states {
        Some(path) => {
            let mut states = io::parse_reference(&io::read_text(path)?, labels)?;
            // Only an explicit prefix length may cut the reference short.
            let fits = match cli.length {
                Some(n) => states.len() >= n,
                None => states.len() == observations.len(),
            };
            if !fits {
                return Err(Error::LengthMismatch {
                    expected: observations.len(),
                    found: states.len(),
                });
            }
            states.truncate(observations.len());
            Some(states)
        }
        None => None,
    };

    tracing::info!(
        observations = observations.len(),
        model = ?cli.model,
        alignment = ?decoder.alignment(),
        "decoding"
    );
    let decoding = decoder.decode(&observations)?;
    tracing::info!(log_prob = decoding.log_prob(), "decoded");

    let wrap = cli.wrap.or(cli.model.default_wrap());
    let mut out = String::new();
    if let Some(reference) = &reference {
        out.push_str("State solution:\n");
        out.push_str(&io::render_path(reference, labels, wrap));
        out.push_str("\n\n");
    }
    out.push_str("Viterbi output:\n");
    out.push_str(&io::render_path(decoding.path(), labels, wrap));
    out.push('\n');
    if let Some(reference) = &reference {
        let agreement = io::compare(decoding.path(), reference)?;
        out.push_str(&format!("Agreement: {agreement}\n"));
    }
    Ok(out)
}
