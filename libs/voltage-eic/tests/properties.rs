//! Property tests for format recognition, check characters and classification

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use proptest::prelude::*;
use voltage_eic::alphabet::{self, SYMBOLS};
use voltage_eic::{calc_check_char, get_type, is_valid, may_be_eic, EicType};

const DISCRIMINATORS: &str = "xyzvwtaXYZVWTA";

/// Well-formed prefix: two symbols, a discriminator, twelve symbols
fn prefix() -> impl Strategy<Value = String> {
    (
        "[0-9a-zA-Z-]{2}",
        prop::sample::select(DISCRIMINATORS.chars().collect::<Vec<_>>()),
        "[0-9a-zA-Z-]{12}",
    )
        .prop_map(|(head, t, tail)| format!("{}{}{}", head, t, tail))
}

proptest! {
    #[test]
    fn wrong_length_is_never_plausible(s in "[0-9a-zA-Z-]{0,40}") {
        prop_assume!(s.len() != 15 && s.len() != 16);
        prop_assert!(!may_be_eic(&s));
        prop_assert!(!is_valid(&s));
        prop_assert!(get_type(&s).is_err());
    }

    #[test]
    fn illegal_character_is_never_plausible(
        s in prefix(),
        position in 0usize..15,
        bad in "[^0-9a-zA-Z-]",
    ) {
        let mut chars: Vec<char> = s.chars().collect();
        chars[position] = bad.chars().next().unwrap();
        let candidate: String = chars.into_iter().collect();
        prop_assert!(!may_be_eic(&candidate));
    }

    #[test]
    fn plausibility_follows_third_character(s in "[0-9a-zA-Z-]{15,16}") {
        let third = s.chars().nth(2).unwrap();
        let registered = EicType::from_discriminator(third).is_some();
        prop_assert_eq!(may_be_eic(&s), registered);
    }

    #[test]
    fn check_character_is_deterministic_symbol(s in prefix(), extra in "[0-9a-zA-Z-]?") {
        let first = calc_check_char(&s).unwrap();
        let again = calc_check_char(&format!("{}{}", s, extra)).unwrap();
        prop_assert_eq!(first, again);
        prop_assert!(SYMBOLS.contains(&(first as u8)));
        prop_assert!(!first.is_ascii_uppercase());
    }

    #[test]
    fn appending_check_character_validates(s in prefix()) {
        let check = calc_check_char(&s).unwrap();
        let code = format!("{}{}", s, check);
        prop_assert!(is_valid(&code));
        prop_assert!(is_valid(&code.to_ascii_uppercase()));
        prop_assert!(!is_valid(&s));
    }

    #[test]
    fn single_substitution_is_detected(
        s in prefix(),
        position in 0usize..16,
        replacement in 0u8..37,
    ) {
        let check = calc_check_char(&s).unwrap();
        let code = format!("{}{}", s.to_ascii_lowercase(), check);
        let mut chars: Vec<char> = code.chars().collect();
        let new_char = alphabet::symbol_of(replacement).unwrap();
        prop_assume!(chars[position] != new_char);
        // Keep the discriminator registered so only the checksum can reject it
        prop_assume!(position != 2 || EicType::from_discriminator(new_char).is_some());
        chars[position] = new_char;
        let altered: String = chars.into_iter().collect();
        prop_assert!(!is_valid(&altered));
    }

    #[test]
    fn valid_implies_plausible_full_length(s in "[0-9a-zA-Z-]{14,17}") {
        if is_valid(&s) {
            prop_assert!(may_be_eic(&s));
            prop_assert_eq!(s.len(), 16);
        }
    }

    #[test]
    fn type_depends_only_on_third_character(a in prefix(), b in prefix()) {
        let third = a.chars().nth(2).unwrap();
        let mut chars: Vec<char> = b.chars().collect();
        chars[2] = third;
        let b: String = chars.into_iter().collect();
        prop_assert_eq!(get_type(&a).unwrap(), get_type(&b).unwrap());
    }
}
