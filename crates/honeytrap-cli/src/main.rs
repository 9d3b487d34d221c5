use clap::Parser;

mod args;
mod commands;
pub mod exit_codes;
mod logging;

use args::Cli;
use commands::dispatch;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:#}");
            exit_codes::CONFIG_ERROR
        }
    };
    std::process::exit(code);
}
