use clap::Parser;

use super::CliFlags;
use crate::error::Error;

/// Parse `args` (program name first). Any parse failure is an invalid
/// configuration carrying clap's message.
pub fn parse(args: &[String]) -> Result<CliFlags, Error> {
    CliFlags::try_parse_from(args).map_err(|e| {
        let rendered = e.to_string();
        let message = rendered
            .trim()
            .strip_prefix("error: ")
            .unwrap_or(rendered.trim())
            .to_string();
        Error::InvalidConfiguration(message)
    })
}
