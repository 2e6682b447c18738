use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_bench")]
#[command(about = "Compare call-dispatch strategies for a binary arithmetic operation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify all strategies, then time them and print a summary
    Run {
        /// Loop counts to measure (repeatable; defaults to 5 and 500)
        #[arg(short, long)]
        loops: Vec<usize>,

        /// Timed calls per strategy and loop count
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Untimed warm-up calls before each measurement
        #[arg(short, long)]
        warmup: Option<usize>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write a JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the equivalence check before timing
        #[arg(long)]
        skip_verify: bool,
    },

    /// Check that all strategies produce bit-identical output
    Verify {
        /// Loop counts to check (repeatable; defaults to 5 and 500)
        #[arg(short, long)]
        loops: Vec<usize>,

        /// Length of the input and output sequences
        #[arg(long, default_value = "500")]
        length: usize,
    },
}
