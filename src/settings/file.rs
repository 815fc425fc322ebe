//! Settings file persistence.
//!
//! One line, `template,count,keyboard`, with `|` escaping a literal `,` or `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Settings;

const FIELDS: usize = 3;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed settings in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        escape(&settings.template),
        settings.number_of_passwords,
        settings.keyboard
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

/// A missing file yields the defaults; anything unreadable is an error.
pub fn load(path: &Path) -> Result<Settings, LoadError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let malformed = |reason: String| LoadError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let line = contents.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(Settings::default());
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(malformed(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    }

    let number_of_passwords = parts[1]
        .parse()
        .map_err(|_| malformed(format!("invalid count '{}'", parts[1])))?;
    let keyboard = parts[2]
        .parse()
        .map_err(|e: crate::error::Error| malformed(e.to_string()))?;

    log::debug!("loaded settings from {}", path.display());
    Ok(Settings {
        template: parts[0].clone(),
        number_of_passwords,
        keyboard,
    })
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::KeyboardBias;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("nope")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let settings = Settings {
            template: "CVC-dd".into(),
            number_of_passwords: 3,
            keyboard: KeyboardBias::Dvorak,
        };

        save(&settings, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "CVC-dd,3,dvorak\n");
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn delimiter_in_template_survives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let settings = Settings {
            template: "c,v|d".into(),
            ..Settings::default()
        };

        save(&settings, &path).unwrap();
        assert_eq!(load(&path).unwrap().template, "c,v|d");
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "cvc,10\n").unwrap();
        assert!(matches!(load(&path), Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn bad_values_are_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");

        fs::write(&path, "cvc,ten,uniform\n").unwrap();
        assert!(matches!(load(&path), Err(LoadError::Malformed { .. })));

        fs::write(&path, "cvc,10,colemak\n").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("colemak"));
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_escaped("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split_escaped("a|,b,c", ','), vec!["a,b", "c"]);
    }
}
