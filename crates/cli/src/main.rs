mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bpatch", version, about = "Patch marker-delimited blocks inside bundled text files")]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replace the first marker-delimited block in the target file
    Apply(ApplyArgs),

    /// Verify that the marker-delimited block exists in the target file
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// File whose contents become the new block body
    #[arg(long)]
    pub source: PathBuf,

    /// File to patch in place
    #[arg(long)]
    pub target: PathBuf,

    /// Literal anchor that opens the block (e.g. "CONTRACT_SOURCE=`")
    #[arg(long)]
    pub marker: String,

    /// Single character that closes the block
    #[arg(long, default_value = "`")]
    pub delimiter: char,

    /// Report whether the block matches without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// File to inspect
    #[arg(long)]
    pub target: PathBuf,

    /// Literal anchor that opens the block
    #[arg(long)]
    pub marker: String,

    /// Single character that closes the block
    #[arg(long, default_value = "`")]
    pub delimiter: char,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Apply(args) => cmd::apply::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}
