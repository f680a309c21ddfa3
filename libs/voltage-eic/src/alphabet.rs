//! EIC character alphabet
//!
//! The 37 symbols `0-9`, `a-z`, `-` carry the values `0..=36`. `SYMBOLS` is the
//! only source of truth; the symbol -> value table is inverted from it at
//! compile time so the two directions cannot drift apart.

/// Number of symbols in the alphabet (and the checksum modulus)
pub const RADIX: usize = 37;

/// Symbols indexed by their value
pub const SYMBOLS: [u8; RADIX] = *b"0123456789abcdefghijklmnopqrstuvwxyz-";

const UNMAPPED: u8 = u8::MAX;

/// ASCII byte -> value, `UNMAPPED` for bytes outside the alphabet
const VALUES: [u8; 128] = invert(&SYMBOLS);

const fn invert(symbols: &[u8; RADIX]) -> [u8; 128] {
    let mut table = [UNMAPPED; 128];
    let mut value = 0;
    while value < RADIX {
        table[symbols[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Value of an alphabet symbol, case-insensitive
///
/// Returns `None` for anything outside `0-9`, `a-z`, `A-Z`, `-`.
#[inline]
pub fn value_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match VALUES[c.to_ascii_lowercase() as usize] {
        UNMAPPED => None,
        value => Some(value),
    }
}

/// Lowercase symbol for a value in `0..=36`
#[inline]
pub fn symbol_of(value: u8) -> Option<char> {
    SYMBOLS.get(usize::from(value)).map(|&b| char::from(b))
}

/// Whether `c` belongs to the alphabet (case-insensitive)
#[inline]
pub fn is_symbol(c: char) -> bool {
    value_of(c).is_some()
}
