//! voltage-eic - Energy Identification Code (EIC) handling for VoltageEMS
//!
//! Validates and classifies the 16-character identifiers used in European
//! energy-market data exchange. Everything here is pure and synchronous; the
//! tables are compile-time constants, so all functions are safe to call from
//! any thread.
//!
//! # Example
//!
//! ```rust
//! use voltage_eic::{calc_check_char, get_type, is_valid, may_be_eic, Eic, EicType};
//!
//! // Structural check only
//! assert!(may_be_eic("10YDE-VE-------"));
//!
//! // Full check including the check character
//! assert!(is_valid("10YDE-VE-------2"));
//! assert_eq!(calc_check_char("10YDE-VE-------").unwrap(), '2');
//!
//! // Classification does not verify the check character
//! assert_eq!(get_type("10YDE-VE-------9").unwrap(), EicType::Area);
//!
//! // Verified value type
//! let eic: Eic = "10x1001a1001a450".parse().unwrap();
//! assert_eq!(eic.as_str(), "10X1001A1001A450");
//! assert_eq!(eic.eic_type(), EicType::Party);
//! ```
//!
//! # Format
//!
//! | Position | Content |
//! |----------|---------|
//! | 1-2 | Issuing office |
//! | 3 | Type discriminator (`X`, `Y`, `Z`, `V`, `W`, `T`, `A`) |
//! | 4-15 | Object identifier |
//! | 16 | Check character (modulus 37) |
//!
//! # Features
//!
//! - `schema`: derive `schemars::JsonSchema` for `EicType`

pub mod alphabet;
pub mod code;
pub mod codec;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use code::Eic;
pub use codec::{calc_check_char, get_type, is_valid, may_be_eic};
pub use error::{EicError, Result};
pub use types::EicType;
