//! Validated EIC value
//!
//! `Eic` can only be built from a complete code with a correct check
//! character, and always holds the canonical uppercase form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::codec::{self, EIC_LENGTH};
use crate::error::{EicError, Result};
use crate::types::EicType;

/// A verified 16-character Energy Identification Code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Eic {
    code: String,
    eic_type: EicType,
}

impl Eic {
    /// Parse and verify a code (case-insensitive)
    ///
    /// # Errors
    /// - `EicError::InvalidFormat` if the structure is wrong or only the
    ///   15-character prefix is given
    /// - `EicError::CheckCharMismatch` if the 16th character is wrong
    pub fn parse(s: &str) -> Result<Self> {
        // Reuse the classifier so the format error carries the precise reason
        let eic_type = codec::get_type(s)?;

        if s.len() != EIC_LENGTH {
            debug!(input = s, "EIC is missing its check character");
            return Err(EicError::invalid_format(format!(
                "expected {} characters, got {}",
                EIC_LENGTH,
                s.len()
            )));
        }

        let expected = codec::calc_check_char(s)?;
        let actual = char::from(s.as_bytes()[EIC_LENGTH - 1]).to_ascii_lowercase();
        if expected != actual {
            debug!(input = s, %expected, %actual, "EIC check character mismatch");
            return Err(EicError::CheckCharMismatch { expected, actual });
        }

        Ok(Self {
            code: s.to_ascii_uppercase(),
            eic_type,
        })
    }

    /// Canonical uppercase form
    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn eic_type(&self) -> EicType {
        self.eic_type
    }

    /// The 16th character, uppercase
    pub fn check_char(&self) -> char {
        char::from(self.code.as_bytes()[EIC_LENGTH - 1])
    }
}

impl fmt::Display for Eic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Eic {
    type Err = EicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Eic {
    type Error = EicError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Eic {
    type Error = EicError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Eic> for String {
    fn from(eic: Eic) -> Self {
        eic.code
    }
}

impl AsRef<str> for Eic {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
