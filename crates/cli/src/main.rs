use anyhow::Result;
use clap::Parser;
use env_logger::init;
use noto_autofix_cli::cli::Cli;

fn main() -> Result<()> {
    init();
    Cli::parse().run()
}
