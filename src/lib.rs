//! Template-driven password generator.
//!
//! A template such as `cvcpcvccvcpdd` names one character class per position
//! (consonant, vowel, punctuation, digit, ...). Each position is drawn
//! independently from its class's pool, and the same pools give the
//! template's strength in bits.

pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
