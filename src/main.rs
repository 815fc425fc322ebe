use std::env;
use std::process::ExitCode;

use passgen::{cli, exits};

fn main() -> ExitCode {
    exits::install_handlers();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
