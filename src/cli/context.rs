//! CLI context: flags merged with saved defaults, then dispatched to one mode.

use std::io::Write;

use rand::Rng;

use super::{CliFlags, help, prompts};
use crate::error::Result;
use crate::pass::{self, KeyboardBias, PoolTable, Template};
use crate::rng;
use crate::settings::Settings;

/// What a run produces. Fixed once flags are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Generate { count: usize },
    Measure,
}

/// Application context for one invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments; saved defaults are loaded by [`Context::run`].
    pub fn new(args: Vec<String>) -> Result<Self> {
        let flags = super::parse(&args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    /// Run with a freshly seeded generator.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let mut rng = rng::seeded();
        self.run_with(&mut rng, out)
    }

    pub fn run_with<R, W>(&mut self, rng: &mut R, out: &mut W) -> Result<()>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        if self.handle_info_flags(&mut *out)? {
            return Ok(());
        }

        self.load_settings();
        self.apply_flags();

        let templates = self.templates()?;
        let table = PoolTable::build(self.keyboard());

        // Every template must resolve before anything is printed.
        let resolved = templates
            .iter()
            .map(|t| t.resolve(&table))
            .collect::<Result<Vec<_>>>()?;

        // Only settings that produced a valid run are worth keeping.
        self.handle_save();

        let mode = self.mode();
        log::debug!(
            "{mode:?} over {} template(s) with {} layout",
            templates.len(),
            table.bias()
        );

        match mode {
            Mode::Measure => {
                for (template, pools) in templates.iter().zip(&resolved) {
                    writeln!(out, "{}: {}", template, pass::entropy(pools))?;
                }
            }
            Mode::Generate { count } => {
                for pools in &resolved {
                    pass::generate_batch(pools, count, &mut *rng, &mut *out)?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Returns true when help or version was printed and nothing else should run.
    fn handle_info_flags<W: Write>(&self, out: &mut W) -> Result<bool> {
        if self.flags.help {
            help::write_help(&mut *out)?;
            return Ok(true);
        }
        if self.flags.version {
            writeln!(out, "passgen {}", env!("CARGO_PKG_VERSION"))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn load_settings(&mut self) {
        if self.flags.default {
            return;
        }
        self.settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("{e}; using built-in defaults"));
            Settings::default()
        });
    }

    /// Explicit flags override saved defaults.
    fn apply_flags(&mut self) {
        if let Some(template) = self.flags.templates.first() {
            self.settings.template = template.clone();
        }
        if let Some(number) = self.flags.number {
            self.settings.number_of_passwords = number;
        }
        if let Some(keyboard) = self.flags.keyboard {
            self.settings.keyboard = keyboard;
        }
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        if self.flags.templates.len() > 1 {
            prompts::warn(&format!(
                "only the first template ({}) is saved as the default",
                self.settings.template
            ));
        }
        match self.settings.save_to_file() {
            Ok(path) => prompts::settings_saved(&path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    fn templates(&self) -> Result<Vec<Template>> {
        if self.flags.templates.is_empty() {
            return Ok(vec![Template::new(&self.settings.template)?]);
        }
        self.flags.templates.iter().map(|t| Template::new(t)).collect()
    }

    fn keyboard(&self) -> KeyboardBias {
        self.settings.keyboard
    }

    pub fn mode(&self) -> Mode {
        if self.flags.bits {
            Mode::Measure
        } else {
            Mode::Generate {
                count: self.settings.number_of_passwords,
            }
        }
    }
}
