//! Error types shared by the generator and the CLI.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Bad keyboard layout, count, template or other malformed input.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// A template character with no pool behind it.
    #[error("unknown template symbol '{symbol}' at position {position} in \"{template}\"")]
    UnknownSymbol {
        symbol: char,
        position: usize,
        template: String,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
