use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sqlgen::cli::app::{run, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let default = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder().with_env_filter(env).init();

    run(&args)
}
