use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run(cli::Args::parse())
}
