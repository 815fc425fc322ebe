use clap::{ArgAction, Parser};

use crate::pass::KeyboardBias;

#[derive(Parser, Debug)]
#[command(
    name = "passgen",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliFlags {
    /// Password template; repeat to run several templates in order
    #[arg(short = 't', long = "template", value_name = "TEMPLATE", action = ArgAction::Append)]
    pub templates: Vec<String>,

    /// Passwords to generate per template
    #[arg(short = 'n', long = "num", value_name = "N")]
    pub number: Option<usize>,

    /// Report template entropy in bits instead of generating
    #[arg(short = 'b', long = "bits")]
    pub bits: bool,

    /// Keyboard layout to weight characters for
    #[arg(short = 'k', long = "keyboard", value_enum, value_name = "LAYOUT", ignore_case = true)]
    pub keyboard: Option<KeyboardBias>,

    /// Save the effective template, count and layout as defaults
    #[arg(short = 's', long = "save")]
    pub save: bool,

    /// Ignore saved defaults for this run
    #[arg(short = 'd', long = "default")]
    pub default: bool,

    #[arg(short = 'h', long = "help")]
    pub help: bool,

    #[arg(short = 'v', long = "version")]
    pub version: bool,
}
