//! gramdl CLI — baking ingredient gram/deciliter conversion.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gramdl",
    version,
    about = "Convert baking ingredient weights to volumes — grams to deciliters and back"
)]
struct Cli {
    #[command(subcommand)]
    command: gramdl::cli::Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = gramdl::cli::dispatch(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
