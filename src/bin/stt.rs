use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use koe::cli::args::SttArgs;
use koe::cli::transcribe;

fn main() {
    env_logger::init();

    let args = match SttArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = transcribe::run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
