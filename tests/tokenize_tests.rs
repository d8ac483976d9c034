use detronade::scanner;
use detronade::{Severity, TokenKind, TokenValue, compile};
use rstest::rstest;

fn kinds(source: &str) -> Vec<TokenKind> {
    scanner::scan(source)
        .expect("scan should succeed")
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn first_value(source: &str) -> TokenValue {
    let tokens = scanner::scan(source).expect("scan should succeed");
    tokens[0].value.clone()
}

fn only_error(source: &str) -> String {
    let unit = compile("t", source);
    assert!(!unit.success, "expected failure for {source:?}");
    assert!(unit.tokens.is_empty());
    let errors: Vec<_> = unit
        .messages
        .iter()
        .filter(|m| m.severity == Severity::Error)
        .collect();
    assert_eq!(errors.len(), 1, "exactly one error: {:?}", unit.messages);
    errors[0].text.clone()
}

#[test]
fn fixture_sample_scans_cleanly() {
    let source = include_str!("../fixtures/sample.dtn");
    let unit = compile("sample.dtn", source);
    assert!(unit.success);
    assert!(unit.messages.is_empty());
    assert_eq!(unit.line_count, 9);

    let texts: Vec<&str> = unit.tokens.iter().filter_map(|t| t.as_str()).collect();
    assert_eq!(&texts[..3], &["let", "width", "="]);
    assert!(texts.contains(&"<<="));
    assert!(texts.contains(&">="));
    assert_eq!(unit.tokens[3].value, TokenValue::Float(31.0));

    let floats: Vec<f32> = unit.tokens.iter().filter_map(|t| t.as_float()).collect();
    assert_eq!(floats, vec![31.0, 6.5, 1000.0, 10.0, 2.0]);

    let chars: Vec<char> = unit
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::CharLiteral)
        .filter_map(|t| t.as_char())
        .collect();
    assert_eq!(chars, vec!['\x07', 'A']);

    assert!(unit.tokens.iter().any(|t| t.kind == TokenKind::StringLiteral
        && t.as_str() == Some("hello,\tworld\n")));
    assert!(unit.tokens.iter().any(|t| t.as_char() == Some('@')));
    assert!(unit.tokens.iter().any(|t| t.as_char() == Some('$')));
}

#[rstest]
#[case("")]
#[case("\n\n\t  ")]
#[case("# comment only")]
#[case("  # a\n# b\n   ")]
fn blank_sources_have_no_tokens(#[case] source: &str) {
    let unit = compile("t", source);
    assert!(unit.success);
    assert!(unit.tokens.is_empty());
    assert!(unit.messages.is_empty());
}

#[rstest]
#[case("0x1A", 26.0)]
#[case("0b110.1", 6.5)]
#[case("1'000", 1000.0)]
#[case("0o7.4", 7.5)]
#[case("0d0.25", 0.25)]
fn numerals_have_their_mathematical_value(#[case] source: &str, #[case] expected: f32) {
    assert_eq!(first_value(source), TokenValue::Float(expected));
}

#[test]
fn multiple_points_error_points_at_the_second_point() {
    let unit = compile("t", "1.2.3");
    assert_eq!(
        unit.messages[0].text,
        "multiple decimal points in decimal numerical literal"
    );
    assert_eq!(unit.messages[0].pos.pointing_to(), 3);
}

#[test]
fn char_literal_arity() {
    assert_eq!(only_error("'\\;'"), "char literal cannot be empty");
    assert_eq!(only_error("''"), "char literal cannot be empty");
    assert_eq!(only_error("'ab'"), "too many characters in char literal");
}

#[test]
fn empty_escape_in_string_contributes_nothing() {
    assert_eq!(
        first_value("\"a\\;b\""),
        TokenValue::Str("ab".to_string())
    );
}

#[test]
fn hex_escape_in_char_literal() {
    assert_eq!(first_value("'\\x41'"), TokenValue::Char('A'));
}

#[test]
fn oversized_escape_succeeds_with_a_warning() {
    let unit = compile("t", "'\\x1FF'");
    assert!(unit.success);
    assert_eq!(unit.tokens.len(), 1);
    assert_eq!(unit.messages.len(), 1);
    assert_eq!(unit.messages[0].severity, Severity::Warning);
}

#[test]
fn unterminated_string_produces_no_tokens() {
    assert_eq!(only_error("x \"abc"), "unexpected EOF");
}

#[test]
fn unrecognized_escape_is_fatal() {
    assert_eq!(only_error("\"\\q\""), "invalid character `q` in escape code");
    assert_eq!(only_error("\"\\"), "unexpected EOF");
}

#[test]
fn invalid_source_character() {
    assert_eq!(only_error("a = `b`"), "invalid character ``` in source code");
}

#[test]
fn operator_run_is_one_token() {
    assert_eq!(kinds("<<="), vec![TokenKind::Operator]);
    assert_eq!(first_value("<<="), TokenValue::Str("<<=".to_string()));
}

#[test]
fn punctuation_is_never_merged() {
    assert_eq!(
        kinds("(),"),
        vec![
            TokenKind::Punctuation,
            TokenKind::Punctuation,
            TokenKind::Punctuation
        ]
    );
}

#[test]
fn warnings_before_a_fatal_error_are_kept() {
    let unit = compile("t", "'\\d999' \"open");
    assert!(!unit.success);
    assert_eq!(unit.messages.len(), 2);
    assert_eq!(unit.messages[0].severity, Severity::Warning);
    assert_eq!(unit.messages[1].severity, Severity::Error);
}

#[rstest]
#[case(include_str!("../fixtures/sample.dtn"))]
#[case(include_str!("../fixtures/bad_number.dtn"))]
#[case(include_str!("../fixtures/loud_escape.dtn"))]
#[case("'\\d999' \"open")]
fn tokenizing_twice_gives_identical_results(#[case] source: &str) {
    let first = compile("t", source);
    let second = compile("t", source);
    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.messages, second.messages);
    assert_eq!(first.success, second.success);
}
