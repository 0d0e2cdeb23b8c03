//! Expression grammar inside `{{ }}` and `{% if %}`.

mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use stencil::{recognize, recognize_with, AcceptAll, ParseError, ParserOptions, Span, SyntaxError, TokenKind};

use common::unexpected;

/// Wraps an expression in an interpolation inside a `<p>` tag. The
/// expression itself starts at column 7.
fn interpolate(expr: &str) -> String {
    format!("<p>{{{{ {} }}}}</p>", expr)
}

#[rstest]
#[case::identifier("name")]
#[case::int("42")]
#[case::float("3.25")]
#[case::string("\"hello\"")]
#[case::precedence("1 + 2 * 3")]
#[case::parenthesized("(1 + 2) * 3")]
#[case::left_associative("a - b - c / d / e")]
#[case::equality_chain("x == y != z")]
#[case::single_relation("1 < 2")]
#[case::relation_under_equality("a > b == c < d")]
#[case::string_concat("\"Hi \" + name")]
#[case::deep_parens("(((x)))")]
#[case::list("[1, 2, 3]")]
#[case::single_element_list("[x]")]
#[case::nested_lists("[[1], [a, \"s\"], [2.5 * 2]]")]
#[case::list_in_arithmetic("[1] + [2]")]
#[case::comparison_in_parens("(1 < 2) == (3 > 4)")]
fn accepts_expressions(#[case] expr: &str) {
    assert_eq!(recognize(&interpolate(expr)), Ok(()));
}

#[test]
fn accepts_any_number_of_operands() {
    let operators = ["+", "-", "*", "/"];

    for count in 1..=40 {
        let mut expr = String::from("n0");
        for i in 1..count {
            expr.push_str(&format!(" {} n{}", operators[i % operators.len()], i));
        }

        assert_eq!(recognize(&interpolate(&expr)), Ok(()), "{}", expr);
        assert_eq!(recognize(&interpolate(&format!("({})", expr))), Ok(()), "({})", expr);
    }
}

#[rstest]
#[case::leading_plus("+ 3", TokenKind::Identifier, TokenKind::Plus, 7)]
#[case::leading_star("* 3", TokenKind::Identifier, TokenKind::Asterisk, 7)]
#[case::trailing_plus("1 +", TokenKind::Identifier, TokenKind::CloseBrace, 11)]
#[case::doubled_operator("1 * / 2", TokenKind::Identifier, TokenKind::Slash, 11)]
#[case::chained_relation("1 < 2 < 3", TokenKind::CloseBrace, TokenKind::LessThan, 13)]
#[case::trailing_comma("[1, 2,]", TokenKind::Identifier, TokenKind::CloseBracket, 13)]
#[case::leading_comma("[, 1]", TokenKind::Identifier, TokenKind::Comma, 8)]
#[case::empty_list("[]", TokenKind::Identifier, TokenKind::CloseBracket, 8)]
#[case::unclosed_paren("(1 + 2", TokenKind::RightParens, TokenKind::CloseBrace, 14)]
#[case::unclosed_list("[1, 2", TokenKind::CloseBracket, TokenKind::CloseBrace, 13)]
#[case::empty_interpolation("", TokenKind::Identifier, TokenKind::CloseBrace, 8)]
#[case::keyword_operand("1 + if", TokenKind::Identifier, TokenKind::IfKeyword, 11)]
#[case::lone_assign("a = b", TokenKind::CloseBrace, TokenKind::Unknown, 9)]
fn rejects_malformed_expressions(
    #[case] expr: &str,
    #[case] expected: TokenKind,
    #[case] found: TokenKind,
    #[case] column: usize,
) {
    assert_eq!(
        unexpected(recognize(&interpolate(expr))),
        (expected, found, Span::new(1, column))
    );
}

#[test]
fn relation_in_if_condition() {
    assert_eq!(recognize("<p>{% if a < b %}<x></x>{% endif %}</p>"), Ok(()));
    assert_eq!(
        unexpected(recognize("<p>{% if a < b > c %}<x></x>{% endif %}</p>")),
        (TokenKind::Percentage, TokenKind::GreaterThan, Span::new(1, 16))
    );
}

#[test]
fn parenthesized_nesting_respects_the_limit() {
    let options = ParserOptions {
        max_depth: 3,
        ..ParserOptions::default()
    };

    assert_eq!(
        recognize_with(&interpolate("(((1)))"), AcceptAll, options.clone()),
        Ok(())
    );
    assert!(matches!(
        recognize_with(&interpolate("((((1))))"), AcceptAll, options.clone()),
        Err(ParseError::Syntax(SyntaxError::NestingTooDeep { limit: 3, .. }))
    ));
    assert!(matches!(
        recognize_with(&interpolate("[[[[1]]]]"), AcceptAll, options),
        Err(ParseError::Syntax(SyntaxError::NestingTooDeep { limit: 3, .. }))
    ));
}
