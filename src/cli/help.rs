//! Usage text.

use std::io::{self, Write};

use crate::pass::DEFAULT_TEMPLATE;
use crate::terminal::{BoxWriter, RESET, UNDERLINE};

pub fn write_help<W: Write>(out: W) -> io::Result<()> {
    let mut b = BoxWriter::new(out);

    b.top("passgen")?;
    b.line_center("Template-driven password generator")?;
    b.line("")?;
    b.line("USAGE:")?;
    b.line("  passgen [-hvbsd] [-t <template>] [-n <number>] [-k <layout>]")?;
    b.line("")?;
    b.line("OPTIONS:")?;
    b.opt(
        "  -t, --template <T>",
        &format!("Password template (default: {DEFAULT_TEMPLATE}). Repeat for several."),
    )?;
    b.opt("  -n, --num <N>", "Passwords to generate per template (default: 10)")?;
    b.opt("  -b, --bits", "Print template entropy in bits; no passwords generated")?;
    b.opt(
        "  -k, --keyboard <LAYOUT>",
        "Key distribution to prefer: uniform (u), qwerty (q) or dvorak (d). Default: uniform",
    )?;
    b.opt("  -s, --save", "Save template, count and layout as defaults")?;
    b.opt("  -d, --default", "Ignore saved defaults")?;
    b.opt("  -h, --help", "Display this help message")?;
    b.opt("  -v, --version", "Display version")?;
    b.line("")?;
    b.line(&format!("{UNDERLINE}Template characters{RESET}:"))?;
    b.opt("  c", "lowercase consonant")?;
    b.opt("  v", "lowercase vowel")?;
    b.opt("  l", "lowercase letter")?;
    b.opt("  C", "mixed-case consonant")?;
    b.opt("  V", "mixed-case vowel")?;
    b.opt("  L", "mixed-case letter")?;
    b.opt("  d, D", "digit")?;
    b.opt("  p, P", "punctuation symbol (from !@#%^&()-_+=[]{};,.?)")?;
    b.opt("  h, H", "hex digit (h for lowercase a-f, H for uppercase)")?;
    b.opt("  -", "literal dash")?;
    b.line("")?;
    b.line("EXAMPLES:")?;
    b.line("  passgen                     Ten passwords from the default template")?;
    b.line("  passgen -t CVCdd -n 3       Three passwords like 'XaT07'")?;
    b.line("  passgen -b -t cvcpcvccvcpdd Strength of a template in bits")?;
    b.line("  passgen -k dvorak           Favour dvorak home-row keys")?;
    b.line("")?;
    b.bottom()?;

    b.into_inner().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{KeyboardBias, PoolTable};

    #[test]
    fn help_lists_every_template_symbol() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let table = PoolTable::build(KeyboardBias::Uniform);
        let listed: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("│"))
            .filter_map(|l| l.trim_start().split("  ").next())
            .flat_map(|column| column.split(", "))
            .collect();
        for symbol in table.symbols() {
            assert!(
                listed.contains(&symbol.to_string().as_str()),
                "symbol {symbol:?} missing from help"
            );
        }
        assert!(text.contains("--keyboard"));
    }
}
