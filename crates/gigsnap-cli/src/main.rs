//! gigsnap CLI
//!
//! Fetches the concert catalog and prints a Go source snapshot to stdout.

use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "gigsnap")]
#[command(about = "gigsnap - Go source snapshots of the concert catalog", long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: commands::generate::GenerateArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::generate::execute(cli.generate) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
