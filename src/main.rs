//! CLI entry point for the shape packing solver

use clap::Parser;
use polypack::io::cli::{Cli, PackRunner};

// The verdict line is the program's output
#[allow(clippy::print_stdout)]
fn main() -> polypack::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    let report = PackRunner::new(cli).run()?;
    println!("{report}");
    Ok(())
}
