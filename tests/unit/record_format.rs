//! Record-format edge cases the parser must pin down precisely.

use typeahead::{parse, ParseError};

use super::common::input_record;

#[test]
fn count_headers_tolerate_surrounding_whitespace() {
    let input = parse(" 2 \naaa 10\nbbb 5\n 1 \na\n").unwrap();
    assert_eq!(input.vocabulary, ["aaa", "bbb"]);
    assert_eq!(input.prefixes, ["a"]);
}

#[test]
fn vocabulary_tokens_split_on_any_whitespace() {
    // Tab-separated still yields exactly two tokens.
    let input = parse("1\naaa\t10\n1\na\n").unwrap();
    assert_eq!(input.vocabulary, ["aaa"]);
}

#[test]
fn prefixes_are_not_trimmed() {
    let input = parse(&input_record(&[("aaa", 1)], &["  a", "a  "])).unwrap();
    assert_eq!(input.prefixes, ["  a", "a  "]);
}

#[test]
fn a_lone_newline_is_a_malformed_header() {
    // lines() sees one empty line; that is not a usable count.
    assert_eq!(
        parse("\n"),
        Err(ParseError::MalformedFormat {
            line: 1,
            found: String::new(),
        })
    );
}

#[test]
fn frequency_larger_than_u32_is_accepted() {
    let input = parse(&input_record(&[("aaa", u64::MAX), ("bbb", 0)], &["b"])).unwrap();
    assert_eq!(input.vocabulary, ["aaa", "bbb"]);
}

#[test]
fn word_count_line_must_not_carry_extra_tokens() {
    assert_eq!(
        parse("1 1\naaa 10\n1\na\n"),
        Err(ParseError::MalformedFormat {
            line: 1,
            found: "1 1".to_string(),
        })
    );
}

#[test]
fn the_error_kind_reports_the_first_violation_only() {
    // Both a malformed vocabulary line and a surplus trailing line; the
    // vocabulary line is hit first.
    let result = parse("1\nbroken\n1\na\nb\n");
    assert_eq!(
        result,
        Err(ParseError::MalformedFormat {
            line: 2,
            found: "broken".to_string(),
        })
    );
}

#[test]
fn parse_errors_implement_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(ParseError::InvalidInput);
    assert_eq!(err.to_string(), "input is empty");
}
