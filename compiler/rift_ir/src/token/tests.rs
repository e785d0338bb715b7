use super::*;
use crate::SourcePosition;

#[test]
fn punctuation_round_trips_through_display_name() {
    for c in "<>=!?:;,.+-/*%^|~&@#${}()[]".chars() {
        let kind = TokenKind::from_punct(c).unwrap();
        assert_eq!(kind.display_name(), c.to_string());
    }
    assert_eq!(TokenKind::from_punct('a'), None);
    assert_eq!(TokenKind::from_punct('"'), None);
}

#[test]
fn display_includes_payload() {
    assert_eq!(
        TokenKind::Identifier("div".into()).to_string(),
        "identifier 'div'"
    );
    assert_eq!(TokenKind::String("x".into()).to_string(), "string \"x\"");
    assert_eq!(TokenKind::TagClose.to_string(), "'>'");
    assert_eq!(TokenKind::ScriptEnd.to_string(), "'</script>'");
}

#[test]
fn token_span_follows_position_length() {
    let token = Token::new(
        TokenKind::Identifier("id".into()),
        SourcePosition::new(1, 6, 5).with_length(2),
    );
    assert_eq!(token.span().to_range(), 5..7);
    assert_eq!(token.display_name(), "identifier");
    assert_eq!(format!("{token:?}"), "Identifier(\"id\") @ 1:6+2");
}

#[test]
fn identifier_accessor() {
    assert_eq!(TokenKind::Identifier("a".into()).as_identifier(), Some("a"));
    assert_eq!(TokenKind::Text("a".into()).as_identifier(), None);
    assert!(TokenKind::Whitespace(" ".into()).is_whitespace());
}
