//! EIC format recognition, check character and classification
//!
//! All functions are pure and case-insensitive. Classification deliberately
//! relies on the structural check only: `get_type` does not verify the check
//! character, callers who need both call `is_valid` first.

use std::fmt;
use tracing::{debug, trace};

use crate::alphabet::{self, RADIX};
use crate::error::{EicError, Result};
use crate::types::EicType;

/// Length of a complete code
pub const EIC_LENGTH: usize = 16;

/// Length of the part covered by the check character
pub const PREFIX_LENGTH: usize = 15;

/// Zero-based position of the type discriminator
pub const TYPE_POSITION: usize = 2;

/// First structural rule a candidate breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatViolation {
    Length(usize),
    Character { position: usize, found: char },
    Discriminator(char),
}

impl fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatViolation::Length(len) => write!(
                f,
                "expected {} or {} characters, got {}",
                PREFIX_LENGTH, EIC_LENGTH, len
            ),
            FormatViolation::Character { position, found } => {
                write!(f, "illegal character {:?} at position {}", found, position)
            }
            FormatViolation::Discriminator(c) => write!(f, "unknown type discriminator '{}'", c),
        }
    }
}

fn check_format(s: &str) -> std::result::Result<(), FormatViolation> {
    let bytes = s.as_bytes();

    // Any non-ASCII character fails the alphabet check, so counting bytes is enough
    if bytes.len() != PREFIX_LENGTH && bytes.len() != EIC_LENGTH {
        return Err(FormatViolation::Length(s.chars().count()));
    }

    if let Some((position, found)) = s
        .chars()
        .enumerate()
        .find(|&(_, c)| !alphabet::is_symbol(c))
    {
        return Err(FormatViolation::Character { position, found });
    }

    let discriminator = char::from(bytes[TYPE_POSITION]).to_ascii_lowercase();
    if EicType::from_discriminator(discriminator).is_none() {
        return Err(FormatViolation::Discriminator(discriminator));
    }

    Ok(())
}

/// Does the string look like an EIC code?
///
/// True when it is 15 or 16 characters of `0-9`, `a-z`, `A-Z`, `-` and the
/// third character is a registered type discriminator. The check character
/// is not examined.
///
/// ```
/// use voltage_eic::may_be_eic;
///
/// assert!(may_be_eic("10X1001A1001A450"));
/// assert!(may_be_eic("10x1001a1001a45"));
/// assert!(!may_be_eic("10C1001A1001A450"));
/// ```
pub fn may_be_eic(s: &str) -> bool {
    check_format(s).is_ok()
}

/// Calculate the check character for the first 15 characters of `s`
///
/// Anything after the 15th character (normally the check character itself)
/// is ignored. Position `i` of the prefix is weighted `16 - i`, and the
/// weighted sum `c` maps to the symbol with value `36 - ((c - 1) mod 37)`.
/// The result is always lowercase.
///
/// # Errors
/// `EicError::InvalidInput` when `s` has fewer than 15 characters or the
/// prefix contains a character outside the alphabet.
///
/// ```
/// use voltage_eic::calc_check_char;
///
/// assert_eq!(calc_check_char("10YDE-VE-------").unwrap(), '2');
/// assert_eq!(calc_check_char("10YFR-RTE------C").unwrap(), 'c');
/// ```
pub fn calc_check_char(s: &str) -> Result<char> {
    let mut sum: i64 = 0;
    let mut taken = 0;

    for (position, c) in s.chars().take(PREFIX_LENGTH).enumerate() {
        let Some(value) = alphabet::value_of(c) else {
            debug!(input = s, position, "check character: illegal character");
            return Err(EicError::invalid_input(format!(
                "illegal character {:?} at position {}",
                c, position
            )));
        };
        let weight = (PREFIX_LENGTH + 1 - position) as i64;
        sum += weight * i64::from(value);
        taken += 1;
    }

    if taken < PREFIX_LENGTH {
        debug!(input = s, len = taken, "check character: prefix too short");
        return Err(EicError::invalid_input(format!(
            "need at least {} characters, got {}",
            PREFIX_LENGTH, taken
        )));
    }

    let radix = RADIX as i64;
    let index = (radix - 1) - (sum - 1).rem_euclid(radix);
    trace!(input = s, sum, index, "check character");

    alphabet::symbol_of(index as u8)
        .ok_or_else(|| EicError::invalid_input(format!("check value {} out of range", index)))
}

/// Is the string a complete EIC code with a correct check character?
///
/// The comparison is case-insensitive. A 15-character prefix is never valid.
///
/// ```
/// use voltage_eic::is_valid;
///
/// assert!(is_valid("10X1001A1001A450"));
/// assert!(is_valid("10yde-ve-------2"));
/// assert!(!is_valid("10X1001A1001A451"));
/// assert!(!is_valid("10X1001A1001A45"));
/// ```
pub fn is_valid(s: &str) -> bool {
    if !may_be_eic(s) || s.len() != EIC_LENGTH {
        return false;
    }
    let actual = char::from(s.as_bytes()[EIC_LENGTH - 1]).to_ascii_lowercase();
    matches!(calc_check_char(s), Ok(expected) if expected == actual)
}

/// Object type of a structurally plausible code
///
/// Only the `may_be_eic` check is applied; the check character is not
/// verified.
///
/// # Errors
/// `EicError::InvalidFormat` when `may_be_eic(s)` is false.
///
/// ```
/// use voltage_eic::{get_type, EicType};
///
/// assert_eq!(get_type("10X1001A1001A450").unwrap(), EicType::Party);
/// assert_eq!(get_type("10YDE-VE-------2").unwrap(), EicType::Area);
/// assert!(get_type("10C1001A1001A450").is_err());
/// ```
pub fn get_type(s: &str) -> Result<EicType> {
    if let Err(violation) = check_format(s) {
        debug!(input = s, %violation, "Rejected EIC classification");
        return Err(EicError::invalid_format(violation.to_string()));
    }

    EicType::from_discriminator(char::from(s.as_bytes()[TYPE_POSITION]))
        .ok_or_else(|| EicError::invalid_format("unknown type discriminator"))
}
