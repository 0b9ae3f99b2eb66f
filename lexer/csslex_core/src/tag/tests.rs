use super::*;
use pretty_assertions::assert_eq;

// === TokenTag ===

#[test]
fn tag_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenTag>(), 1);
}

#[test]
fn discriminants_are_stable() {
    // The grammar tables index external tokens by these values.
    assert_eq!(TokenTag::Identifier as u8, 0);
    assert_eq!(TokenTag::VariableName as u8, 1);
    assert_eq!(TokenTag::Callee as u8, 2);
    assert_eq!(TokenTag::DescendantCombinator as u8, 3);
    assert_eq!(TokenTag::Unit as u8, 4);
}

#[test]
fn names_match_grammar_terms() {
    assert_eq!(TokenTag::Identifier.name(), "Identifier");
    assert_eq!(TokenTag::VariableName.name(), "VariableName");
    assert_eq!(TokenTag::Callee.name(), "Callee");
    assert_eq!(TokenTag::DescendantCombinator.name(), "DescendantCombinator");
    assert_eq!(TokenTag::Unit.name(), "Unit");
}

#[test]
fn only_descendant_combinator_can_be_empty() {
    assert!(TokenTag::DescendantCombinator.can_be_empty());
    assert!(!TokenTag::Identifier.can_be_empty());
    assert!(!TokenTag::VariableName.can_be_empty());
    assert!(!TokenTag::Callee.can_be_empty());
    assert!(!TokenTag::Unit.can_be_empty());
}

// === Token ===

#[test]
fn token_len_and_emptiness() {
    let ident = Token {
        tag: TokenTag::Identifier,
        start: 2,
        end: 7,
    };
    assert_eq!(ident.len(), 5);
    assert!(!ident.is_empty());

    let combinator = Token {
        tag: TokenTag::DescendantCombinator,
        start: 4,
        end: 4,
    };
    assert_eq!(combinator.len(), 0);
    assert!(combinator.is_empty());
}

// === TagSet ===

#[test]
fn bits_follow_discriminants() {
    assert_eq!(TagSet::from(TokenTag::Identifier).bits(), 1 << 0);
    assert_eq!(TagSet::from(TokenTag::VariableName).bits(), 1 << 1);
    assert_eq!(TagSet::from(TokenTag::Callee).bits(), 1 << 2);
    assert_eq!(TagSet::from(TokenTag::DescendantCombinator).bits(), 1 << 3);
    assert_eq!(TagSet::from(TokenTag::Unit).bits(), 1 << 4);
}

#[test]
fn empty_set_shifts_nothing() {
    let stack = TagSet::empty();
    assert!(!stack.can_shift(TokenTag::Identifier));
    assert!(!stack.can_shift(TokenTag::VariableName));
    assert!(!stack.can_shift(TokenTag::Unit));
}

#[test]
fn set_membership_answers_queries() {
    let stack = TagSet::VARIABLE_NAME | TagSet::IDENTIFIER;
    assert!(stack.can_shift(TokenTag::VariableName));
    assert!(stack.can_shift(TokenTag::Identifier));
    assert!(!stack.can_shift(TokenTag::Callee));
}

#[test]
fn all_tags_fit_in_the_set() {
    let stack = TagSet::all();
    for tag in [
        TokenTag::Identifier,
        TokenTag::VariableName,
        TokenTag::Callee,
        TokenTag::DescendantCombinator,
        TokenTag::Unit,
    ] {
        assert!(stack.can_shift(tag), "missing bit for {}", tag.name());
    }
}
