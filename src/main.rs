use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bst_commands::Dispatcher;

#[derive(Parser, Debug)]
#[command(name = "bst-commands", version)]
#[command(about = "Runs a file of binary search tree commands, one per line")]
struct Cli {
    /// File of commands such as `insert 5` or `inorder`
    input: PathBuf,

    /// Where to write one line of results per command
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();

    let input = File::open(&args.input)
        .with_context(|| format!("Error opening input file {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("Error creating output file {}", args.output.display()))?;

    info!("running {} into {}", args.input.display(), args.output.display());
    let summary = Dispatcher::new().run(BufReader::new(input), BufWriter::new(output))?;
    info!(
        "{} lines read, {} commands executed, {} ignored",
        summary.lines, summary.executed, summary.ignored
    );

    Ok(())
}
