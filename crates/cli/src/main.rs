//! # retina-edu
//!
//! Thin entry point; all logic lives in the `retina_edu_cli` library.

use anyhow::Result;
use clap::Parser;
use retina_edu_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the material on stdout stays clean.
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match run(cli).await {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(e) => {
            eprintln!("[retina-edu error] {e:?}");
            std::process::exit(1);
        }
    }
}
