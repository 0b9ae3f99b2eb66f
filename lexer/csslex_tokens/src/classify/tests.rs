use super::*;

// === is_letter_like ===

#[test]
fn ascii_letters_are_letter_like() {
    assert!(is_letter_like(u32::from(b'a')));
    assert!(is_letter_like(u32::from(b'z')));
    assert!(is_letter_like(u32::from(b'A')));
    assert!(is_letter_like(u32::from(b'Z')));
}

#[test]
fn ascii_non_letters_are_not() {
    assert!(!is_letter_like(u32::from(b'0')));
    assert!(!is_letter_like(u32::from(b'9')));
    assert!(!is_letter_like(u32::from(b'-')));
    assert!(!is_letter_like(u32::from(b'_')));
    assert!(!is_letter_like(u32::from(b'%')));
    assert!(!is_letter_like(u32::from(b' ')));
    assert!(!is_letter_like(0));
}

#[test]
fn boundary_sits_exactly_at_161() {
    // 160 is NBSP (whitespace, not a letter); 161 and up count as letters.
    assert!(!is_letter_like(160));
    assert!(is_letter_like(161));
    assert!(is_letter_like(0xE9)); // é
    assert!(is_letter_like(0x4E2D)); // 中
}

#[test]
fn coarse_boundary_over_accepts_by_design() {
    // The >= 161 rule deliberately admits non-letters: Arabic-Indic digits,
    // general punctuation, even emoji. Preserved as-is for grammar
    // conformance.
    assert!(is_letter_like(1632)); // ARABIC-INDIC DIGIT ZERO
    assert!(is_letter_like(0x2014)); // EM DASH
    assert!(is_letter_like(0x1F600));
}

// === is_digit ===

#[test]
fn ascii_digits_only() {
    for cp in 48..=57 {
        assert!(is_digit(cp));
    }
    assert!(!is_digit(47));
    assert!(!is_digit(58));
    assert!(!is_digit(u32::from(b'a')));
    assert!(!is_digit(1632)); // ARABIC-INDIC DIGIT ZERO is not an ASCII digit
    assert!(!is_digit(0));
}

// === is_whitespace ===

#[test]
fn ascii_whitespace() {
    for cp in [9, 10, 11, 12, 13, 32] {
        assert!(is_whitespace(cp), "expected {cp} to be whitespace");
    }
}

#[test]
fn unicode_space_separators() {
    for cp in [133, 160, 5760, 8192, 8197, 8202, 8232, 8233, 8239, 8287, 12288] {
        assert!(is_whitespace(cp), "expected {cp} to be whitespace");
    }
}

#[test]
fn non_whitespace_neighbors_excluded() {
    assert!(!is_whitespace(8)); // backspace
    assert!(!is_whitespace(14));
    assert!(!is_whitespace(31));
    assert!(!is_whitespace(8191));
    assert!(!is_whitespace(8203)); // ZERO WIDTH SPACE is not in the set
    assert!(!is_whitespace(8234));
    assert!(!is_whitespace(0));
    assert!(!is_whitespace(u32::from(b',')));
}

#[test]
fn classes_overlap_only_above_the_coarse_boundary() {
    // Below 161 the classes are disjoint. Above it the >= 161 rule makes
    // every Unicode space separator letter-like as well; conformance with
    // the grammar keeps that overlap.
    for cp in 0..161 {
        assert!(
            !(is_whitespace(cp) && is_letter_like(cp)),
            "{cp} classified as both whitespace and letter-like"
        );
    }
    assert!(is_whitespace(8192) && is_letter_like(8192));
    assert!(is_whitespace(12288) && is_letter_like(12288));
}

// === Purity ===

mod proptest_purity {
    use super::super::{is_digit, is_letter_like, is_whitespace};
    use proptest::prelude::*;

    proptest! {
        /// Repeated invocation over any code point is deterministic.
        #[test]
        fn classification_is_deterministic(cp in 0u32..0x11_0000) {
            prop_assert_eq!(is_letter_like(cp), is_letter_like(cp));
            prop_assert_eq!(is_digit(cp), is_digit(cp));
            prop_assert_eq!(is_whitespace(cp), is_whitespace(cp));
        }

        /// Digits are never letter-like and never whitespace.
        #[test]
        fn digit_class_is_disjoint(cp in 0u32..0x11_0000) {
            if is_digit(cp) {
                prop_assert!(!is_letter_like(cp));
                prop_assert!(!is_whitespace(cp));
            }
        }
    }
}
