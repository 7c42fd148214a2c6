use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use parameter_sweep_filter::{engine, ConstraintSet, FilterJob};
use tracing_subscriber::EnvFilter;

/// Print the indices of the sweep variants whose parameters match the given
/// name/value pairs.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Sweep template file (TOML; or JSON with a .json extension)
    template: PathBuf,

    /// Whitespace-separated name value pairs to filter the variants by
    #[arg(allow_negative_numbers = true)]
    token_pairs: Vec<String>,

    /// Prefix for the emitted labels (default: print only the indices)
    #[arg(short, long)]
    output_prefix: Option<String>,
}

fn main() {
    // Diagnostics go to stderr; stdout carries nothing but the matches.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // The pair check runs before the template file is touched.
    let constraints = match ConstraintSet::from_tokens(&args.token_pairs) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let job = FilterJob {
        template: args.template,
        constraints,
        prefix: args.output_prefix,
    };

    if let Err(err) = engine::run_job(&job, io::stdout().lock()) {
        eprintln!("{err}");
        process::exit(1);
    }
}
