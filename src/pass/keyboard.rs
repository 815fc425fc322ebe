//! Keyboard layout weighting tables.
//!
//! Each layout is a list of `(characters, repeat)` groups per letter class.
//! The pool builder concatenates every group `repeat` times, so a key that
//! is easy to reach on the layout appears more often in its pool.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::Error;

pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";
pub const VOWELS: &str = "aeiouy";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!@#%^&()-_+=[]{};,.?";

/// A run of characters and how many times it is repeated in the pool.
pub type Group = (&'static str, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KeyboardBias {
    #[default]
    #[value(alias = "u")]
    Uniform,
    #[value(alias = "q")]
    Qwerty,
    #[value(alias = "d")]
    Dvorak,
}

/// Repetition groups for the three weighted letter classes.
pub struct Weights {
    pub consonants: &'static [Group],
    pub vowels: &'static [Group],
    pub punctuation: &'static [Group],
}

const UNIFORM: Weights = Weights {
    consonants: &[(CONSONANTS, 1)],
    vowels: &[(VOWELS, 1)],
    punctuation: &[(PUNCTUATION, 1)],
};

// Home row x4, top row x2, bottom row x1.
const QWERTY: Weights = Weights {
    consonants: &[("sdfghjkl", 4), ("qwrtp", 2), ("zxcvbnm", 1)],
    vowels: &[("a", 3), ("eyuio", 2)],
    punctuation: &[
        (";", 6),
        ("[]", 4),
        ("?", 3),
        (",.-={}", 2),
        ("!@#%^&()_+", 1),
    ],
};

const DVORAK: Weights = Weights {
    consonants: &[
        ("htns", 6),
        ("gcrl", 4),
        ("p", 4),
        ("d", 3),
        ("f", 2),
        ("mwvz", 2),
        ("qjk", 2),
        ("b", 1),
        ("x", 1),
    ],
    vowels: &[("aoeu", 4), ("i", 2), ("y", 1)],
    punctuation: &[
        ("-", 6),
        (",.", 4),
        ("_", 3),
        ("=[]?+", 2),
        ("!@#%^&(){};", 1),
    ],
};

impl KeyboardBias {
    pub const ALL: [KeyboardBias; 3] = [Self::Uniform, Self::Qwerty, Self::Dvorak];

    pub fn weights(self) -> &'static Weights {
        match self {
            Self::Uniform => &UNIFORM,
            Self::Qwerty => &QWERTY,
            Self::Dvorak => &DVORAK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Qwerty => "qwerty",
            Self::Dvorak => "dvorak",
        }
    }
}

impl fmt::Display for KeyboardBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyboardBias {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| Error::InvalidConfiguration(format!("unknown keyboard layout '{s}'")))
    }
}
