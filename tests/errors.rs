use parseva::{
    error::{EvalError, LexError, ParseError},
    evaluate,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_HEIGHT, MAX_NESTING, parse},
    },
};

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(EvalError::Parse(e)) => e,
        other => panic!("'{src}' should fail to parse, got {other:?}"),
    }
}

#[test]
fn invalid_character() {
    assert_eq!(evaluate("2 % 3"),
               Err(EvalError::Lex(LexError::InvalidCharacter { character: '%',
                                                               position:  2, })));
    assert_eq!(evaluate("1 + ä"),
               Err(EvalError::Lex(LexError::InvalidCharacter { character: 'ä',
                                                               position:  4, })));
    assert_eq!(evaluate("1.5.2"),
               Err(EvalError::Lex(LexError::InvalidCharacter { character: '.',
                                                               position:  3, })));
    assert!(evaluate("2e10").is_err());
}

#[test]
fn unexpected_tokens() {
    assert_eq!(parse_error("sqrt(,)"),
               ParseError::UnexpectedToken { token:    "','".to_string(),
                                             position: 5, });
    assert_eq!(parse_error("2 +"),
               ParseError::UnexpectedToken { token:    "end of input".to_string(),
                                             position: 3, });
    assert_eq!(parse_error(""),
               ParseError::UnexpectedToken { token:    "end of input".to_string(),
                                             position: 0, });
    assert!(matches!(parse_error("2 3"), ParseError::UnexpectedToken { position: 2, .. }));
    assert!(matches!(parse_error("3!!"), ParseError::UnexpectedToken { position: 2, .. }));
    assert!(matches!(parse_error("sqrt()"), ParseError::UnexpectedToken { position: 5, .. }));
    assert!(matches!(parse_error("sqrt 4"), ParseError::UnexpectedToken { position: 5, .. }));
    assert!(matches!(parse_error("()"), ParseError::UnexpectedToken { position: 1, .. }));
}

#[test]
fn unmatched_parenthesis() {
    assert_eq!(parse_error("(2 + 3"),
               ParseError::UnmatchedParenthesis { position: 0 });
    assert_eq!(parse_error("2 + 3)"),
               ParseError::UnmatchedParenthesis { position: 5 });
    assert_eq!(parse_error("sqrt(4"),
               ParseError::UnmatchedParenthesis { position: 4 });
    assert_eq!(parse_error("pow(2, (3)"),
               ParseError::UnmatchedParenthesis { position: 3 });
}

#[test]
fn closing_parenthesis_without_opener() {
    assert_eq!(parse_error(")"), ParseError::UnmatchedParenthesis { position: 0 });
    assert_eq!(parse_error(")1"), ParseError::UnmatchedParenthesis { position: 0 });
    assert_eq!(parse_error("sqrt)"), ParseError::UnmatchedParenthesis { position: 4 });
    assert_eq!(parse_error("2 + )"), ParseError::UnmatchedParenthesis { position: 4 });

    // Inside a group the `)` does close something, it just comes too early.
    assert!(matches!(parse_error("(2 + )"), ParseError::UnexpectedToken { position: 5, .. }));
    assert!(matches!(parse_error("(sqrt)"), ParseError::UnexpectedToken { position: 5, .. }));
}

#[test]
fn deep_nesting_is_rejected() {
    assert_eq!(parse_error(&"(".repeat(200_000)),
               ParseError::TooDeep { position: MAX_NESTING });
    assert_eq!(parse_error(&format!("{}1", "-".repeat(200_000))),
               ParseError::TooDeep { position: MAX_NESTING });
    assert_eq!(parse_error(&"sqrt(".repeat(200_000)),
               ParseError::TooDeep { position: MAX_NESTING * 5 + 4 });

    let chain = format!("{}1", "1+".repeat(MAX_HEIGHT + 10));
    assert_eq!(parse_error(&chain),
               ParseError::TooDeep { position: 2 * (MAX_HEIGHT - 1) + 1 });

    let err = evaluate(&"(".repeat(1_000)).unwrap_err();
    assert_eq!(err.to_string(),
               format!("Error at position {MAX_NESTING}: Expression is nested too deeply."));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let src = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_eq!(evaluate(&src), Ok(1.0));

    let src = format!("{}1", "-".repeat(MAX_NESTING));
    assert_eq!(evaluate(&src), Ok(1.0));

    let src = format!("{}1", "1+".repeat(MAX_HEIGHT - 1));
    assert_eq!(evaluate(&src), Ok(MAX_HEIGHT as f64));
}

#[test]
fn hand_built_number_must_convert() {
    let tokens = vec![(Token::Number("1.2.3".to_string()), 0), (Token::End, 5)];
    assert_eq!(parse(&tokens),
               Err(ParseError::InvalidNumber { literal:  "1.2.3".to_string(),
                                               position: 0, }));
}

#[test]
fn unknown_function() {
    assert_eq!(parse_error("foo(1)"),
               ParseError::UnknownFunction { name:     "foo".to_string(),
                                             position: 0, });
    assert_eq!(parse_error("1 + bar(2, 3)"),
               ParseError::UnknownFunction { name:     "bar".to_string(),
                                             position: 4, });
}

#[test]
fn arity_mismatch() {
    assert_eq!(parse_error("sqrt(1,2)"),
               ParseError::ArityMismatch { name:     "sqrt".to_string(),
                                           expected: 1,
                                           found:    2,
                                           position: 0, });
    assert_eq!(parse_error("pow(2)"),
               ParseError::ArityMismatch { name:     "pow".to_string(),
                                           expected: 2,
                                           found:    1,
                                           position: 0, });
}

#[test]
fn errors_render_with_position() {
    let err = evaluate("foo(1)").unwrap_err();
    assert_eq!(err.to_string(), "Error at position 0: Unknown function 'foo'.");
    assert_eq!(err.position(), 0);

    let err = evaluate("sqrt(1,2)").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at position 0: Function 'sqrt' takes 1 argument(s), but 2 were supplied.");
}
