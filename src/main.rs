use anyhow::Result;
use clap::Parser;
use dispatch_bench::cli::{execute_run, execute_verify, Cli, Commands, RunOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            loops,
            iterations,
            warmup,
            config,
            output,
            skip_verify,
        } => execute_run(RunOptions {
            loops,
            iterations,
            warmup,
            config,
            output,
            skip_verify,
        }),
        Commands::Verify { loops, length } => execute_verify(loops, length),
    }
}
