use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six metacharacters a router interprets templates and paths with.
/// Fixed for the lifetime of the router that was built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syntax {
    pub override_marker: u8,
    pub separator: u8,
    pub variable: u8,
    pub prefix: u8,
    pub wildcard_one: u8,
    pub wildcard_many: u8,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            override_marker: b'!',
            separator: b'/',
            variable: b':',
            prefix: b'+',
            wildcard_one: b'?',
            wildcard_many: b'*',
        }
    }
}

impl Syntax {
    /// Builds a syntax from caller-chosen metacharacters. All six must be
    /// distinct ASCII bytes; ASCII keeps element boundaries on `str` slicing
    /// boundaries.
    pub fn new(
        override_marker: u8,
        separator: u8,
        variable: u8,
        prefix: u8,
        wildcard_one: u8,
        wildcard_many: u8,
    ) -> Result<Self, SyntaxError> {
        let syntax = Self {
            override_marker,
            separator,
            variable,
            prefix,
            wildcard_one,
            wildcard_many,
        };
        syntax.validate()?;
        Ok(syntax)
    }

    /// Checks the metacharacter invariants. The fields are open, so a value
    /// assembled by hand or deserialized bypasses [`new`](Self::new); every
    /// consumer of a `Syntax` revalidates through this.
    pub fn validate(&self) -> Result<(), SyntaxError> {
        let bytes = [
            self.override_marker,
            self.separator,
            self.variable,
            self.prefix,
            self.wildcard_one,
            self.wildcard_many,
        ];
        for (i, &byte) in bytes.iter().enumerate() {
            if !byte.is_ascii() {
                return Err(SyntaxError::NonAscii { byte });
            }
            if bytes[..i].contains(&byte) {
                return Err(SyntaxError::DuplicateMetacharacter { byte: byte as char });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("metacharacter {byte:#04x} is not ascii")]
    NonAscii { byte: u8 },
    #[error("metacharacter '{byte}' is used for two roles")]
    DuplicateMetacharacter { byte: char },
}
