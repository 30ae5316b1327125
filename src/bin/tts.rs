use clap::Parser;

use koe::cli::args::TtsArgs;
use koe::cli::synthesize;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    synthesize::run(TtsArgs::parse())
}
