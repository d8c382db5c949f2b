//! Races three ways of building a short string.
//!
//! Run with:
//!   cargo run --example format_race                                # median, 100000 iterations
//!   cargo run --example format_race -- --stat average
//!   cargo run --example format_race -- --iterations 30             # triggers the advisory

use anyhow::Result;
use benchrace::prelude::*;
use clap::Parser;

/// Compare string-building strategies head to head
#[derive(Parser, Debug)]
#[command(name = "format_race")]
struct Args {
    /// Repetitions per case
    #[arg(long, default_value_t = benchrace::DEFAULT_ITERATIONS)]
    iterations: u64,

    /// Stat method: median or average
    #[arg(long, default_value = "median")]
    stat: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("benchrace=info")
        .init();

    let args = Args::parse();
    let stat: Stat = args.stat.parse()?;
    let config = MeasureConfig {
        iterations: args.iterations,
        stat,
    };

    let mut cases: Vec<Case> = vec![
        Box::new(|| {
            std::hint::black_box(format!("{}-{}", 42, "suffix"));
        }),
        Box::new(|| {
            let mut s = String::with_capacity(16);
            s.push_str("42");
            s.push('-');
            s.push_str("suffix");
            std::hint::black_box(s);
        }),
        Box::new(|| {
            std::hint::black_box(["42", "-", "suffix"].concat());
        }),
    ];

    compare(&mut cases, &config)?;

    Ok(())
}
