mod context;
mod flags;
mod help;
mod parse;
mod prompts;

use std::io;
use std::process::ExitCode;

pub use context::{Context, Mode};
pub use flags::CliFlags;
pub use parse::parse;

use crate::error::Error;
use crate::exits;

/// Run the CLI against stdout and map the outcome to an exit status.
pub fn run(args: Vec<String>) -> ExitCode {
    // Unbuffered on our side: whole lines pass through stdout's line writer
    // without being held in an extra buffer that is never zeroized.
    let mut out = io::stdout().lock();

    let result = Context::new(args).and_then(|mut ctx| ctx.run(&mut out));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (e.g. piped into `head`); not a failure.
        Err(Error::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::from(exits::status(&e))
        }
    }
}
