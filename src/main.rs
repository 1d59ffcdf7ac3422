//! reftab-extract CLI
//!
//! Entry point: parse arguments, run the extraction, map failures to exit
//! codes. stdout carries exactly one line of JSON in every outcome, so logs
//! go to stderr.

use clap::Parser;
use reftab_extract::cli::{Cli, Runner};
use serde_json::json;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        println!("{}", json!({"ok": false, "error": e.to_string()}));
        std::process::exit(e.exit_code());
    }
}
