//! Box drawing for help output.

use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";

pub const BOX_WIDTH: usize = 74;

/// Collects box-drawn lines into a writer.
pub struct BoxWriter<W: Write> {
    out: W,
}

impl<W: Write> BoxWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn top(&mut self, title: &str) -> io::Result<()> {
        if title.is_empty() {
            writeln!(self.out, "┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = BOX_WIDTH - 2 - title_part.chars().count();
            writeln!(self.out, "┌{}{}┐", title_part, "─".repeat(remaining))
        }
    }

    /// │ content                           │
    pub fn line(&mut self, content: &str) -> io::Result<()> {
        let inner_width = BOX_WIDTH - 4;
        let display_len = console_width(content);

        if display_len <= inner_width {
            let padding = inner_width - display_len;
            writeln!(self.out, "│ {}{} │", content, " ".repeat(padding))
        } else {
            writeln!(self.out, "│ {} │", content)
        }
    }

    pub fn line_center(&mut self, content: &str) -> io::Result<()> {
        let inner_width = BOX_WIDTH - 4;
        let display_len = console_width(content);

        if display_len <= inner_width {
            let total_padding = inner_width - display_len;
            let left_pad = total_padding / 2;
            let right_pad = total_padding - left_pad;
            writeln!(
                self.out,
                "│ {}{}{} │",
                " ".repeat(left_pad),
                content,
                " ".repeat(right_pad)
            )
        } else {
            writeln!(self.out, "│ {} │", content)
        }
    }

    pub fn bottom(&mut self) -> io::Result<()> {
        writeln!(self.out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
    }

    /// Flag column plus a description wrapped to the remaining width.
    pub fn opt(&mut self, flag: &str, desc: &str) -> io::Result<()> {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 27;
        let desc_col = inner_width - flag_col;

        let flag_padded = if flag.len() < flag_col {
            format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
        } else {
            flag[..flag_col].to_string()
        };

        let lines = wrap(desc, desc_col);

        match lines.first() {
            Some(first) => {
                let padding = desc_col.saturating_sub(first.len());
                writeln!(self.out, "│ {}{}{} │", flag_padded, first, " ".repeat(padding))?;
            }
            None => writeln!(self.out, "│ {}{} │", flag_padded, " ".repeat(desc_col))?,
        }

        let indent = " ".repeat(flag_col);
        for line in lines.iter().skip(1) {
            let padding = desc_col.saturating_sub(line.len());
            writeln!(self.out, "│ {}{}{} │", indent, line, " ".repeat(padding))?;
        }
        Ok(())
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width, skipping ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
