//! Self-play runner (default binary).
//!
//! Plays random-policy games through the engine and prints one report per
//! game. There is no rendering or key handling here; reports are plain text
//! or JSON lines on stdout, logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use twenty48::selfplay::{run, SelfplayArgs};

fn main() -> Result<()> {
    let args = SelfplayArgs::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    Ok(())
}
