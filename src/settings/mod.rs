//! Saved generation defaults.

mod file;

pub use file::LoadError;

use std::path::PathBuf;

use crate::pass::{DEFAULT_TEMPLATE, KeyboardBias};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub template: String,
    pub number_of_passwords: usize,
    pub keyboard: KeyboardBias,
}

impl Settings {
    /// Load saved defaults, or built-in defaults if nothing is saved yet.
    pub fn load_from_file() -> Result<Self, LoadError> {
        file::load(&file::default_path())
    }

    pub fn save_to_file(&self) -> std::io::Result<PathBuf> {
        let path = file::default_path();
        file::save(self, &path)?;
        Ok(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            number_of_passwords: 10,
            keyboard: KeyboardBias::Uniform,
        }
    }
}
