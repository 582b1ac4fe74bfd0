//! Cardápio admin CLI

use std::process;

use clap::Parser;

mod cli;

#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error}");
        process::exit(1);
    }
}
