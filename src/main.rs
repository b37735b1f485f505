use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use duckt::{cli, logging};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let rendered = cli::run(&args)?;
    println!("{rendered}");

    Ok(())
}
