//! Terminal frontend for the StoryForge interactive fiction engine.

mod repl;

use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "storyforge",
    about = "StoryForge - an interactive fiction adventure in your terminal",
    version
)]
struct Cli {
    /// Directory where saved games are kept
    #[arg(long, default_value = ".storyforge")]
    save_dir: PathBuf,

    /// RNG seed for reproducible narration
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Narration delay in milliseconds
    #[arg(long, default_value = "1500")]
    delay_ms: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = repl::run(&cli.save_dir, cli.seed, cli.delay_ms).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
