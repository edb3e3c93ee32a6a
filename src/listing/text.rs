//! Plain-text listing loader.
//!
//! Reads listings with one instruction per line:
//!
//! ```text
//! ; comment
//! 0x1000: push rbp
//! 1001    mov rbp, rsp
//! ```
//!
//! The address is hexadecimal with an optional `0x` prefix and an optional
//! trailing `:`. Everything after the first run of whitespace is the
//! instruction text. Blank lines and lines starting with `;` or `#` are
//! skipped.

use crate::domain::error::{IzumiError, Result};
use crate::listing::backend::Loader;
use crate::listing::table::{Instruction, InstructionTable};
use std::path::Path;

/// [`Loader`] for plain-text listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextListingLoader;

impl TextListingLoader {
    /// Parses listing text into a table.
    ///
    /// # Errors
    ///
    /// Returns [`IzumiError::Load`] naming the first malformed line.
    pub fn parse(contents: &str) -> Result<InstructionTable> {
        let mut instructions = Vec::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            let (address, text) = line
                .split_once(char::is_whitespace)
                .map_or((line, ""), |(a, t)| (a, t.trim()));

            let digits = address.trim_end_matches(':');
            let digits = digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .unwrap_or(digits);

            let address = u64::from_str_radix(digits, 16).map_err(|_| {
                IzumiError::Load(format!("line {}: invalid address {address:?}", index + 1))
            })?;

            instructions.push(Instruction::new(address, text));
        }

        Ok(InstructionTable::new(instructions))
    }
}

impl Loader for TextListingLoader {
    fn load(&self, path: &Path) -> Result<InstructionTable> {
        tracing::debug!(path = %path.display(), "loading listing");

        let contents = std::fs::read_to_string(path)?;
        let table = Self::parse(&contents)?;

        tracing::debug!(instructions = table.len(), "listing loaded");
        Ok(table)
    }
}
