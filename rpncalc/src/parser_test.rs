use crate::function::Function;
use crate::parser::{Operand, ParseError, RpnParser, Scope};
use crate::rpneval::MathContext;

fn num(n: f64) -> Operand {
    Operand::Number(n)
}

fn ops(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_parse_plain() {
    let cx = MathContext::new();
    let rpn = RpnParser::parse_str(&cx, "3 4 + 2 *").unwrap();
    let expect = Scope {
        operands: vec![num(3.0), num(4.0), num(2.0)],
        operators: ops(&["+", "*"]),
    };
    assert_eq!(rpn.0, expect);
}

#[test]
fn test_parse_constants() {
    use std::f64::consts::{E, PI};
    let cx = MathContext::new();
    let rpn = RpnParser::parse_str(&cx, "p e .5 5. + + +").unwrap();
    assert_eq!(rpn.0.operands, vec![num(PI), num(E), num(0.5), num(5.0)]);
}

#[test]
fn test_parse_nested() {
    let cx = MathContext::new();
    let rpn = RpnParser::parse_str(&cx, "2 sin( 0 cos( p ) * ) +").unwrap();
    let cos = Scope { operands: vec![num(std::f64::consts::PI)], operators: vec![] };
    let sin = Scope {
        operands: vec![num(0.0), Operand::Call(Function::Cos, cos)],
        operators: ops(&["*"]),
    };
    let expect = Scope {
        operands: vec![num(2.0), Operand::Call(Function::Sin, sin)],
        operators: ops(&["+"]),
    };
    assert_eq!(rpn.0, expect);
}

#[test]
fn test_operators_kept_verbatim() {
    // rejected later by the evaluator, not the parser
    let cx = MathContext::new();
    let rpn = RpnParser::parse_str(&cx, "1 2 -2").unwrap();
    assert_eq!(rpn.0.operators, ops(&["-2"]));
}

#[test]
fn test_count_mismatch() {
    let cx = MathContext::new();
    assert_eq!(
        RpnParser::parse_str(&cx, "1 2 + +"),
        Err(ParseError::CountMismatch { operands: 2, operators: 2, function: None })
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "1 2"),
        Err(ParseError::CountMismatch { operands: 2, operators: 0, function: None })
    );
    assert_eq!(
        RpnParser::parse_str(&cx, ""),
        Err(ParseError::CountMismatch { operands: 0, operators: 0, function: None })
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "ln( -1 )"),
        Err(ParseError::CountMismatch { operands: 0, operators: 1, function: Some(Function::Ln) })
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "sin( ) 1 +"),
        Err(ParseError::CountMismatch { operands: 0, operators: 0, function: Some(Function::Sin) })
    );
}

#[test]
fn test_unbalanced() {
    let cx = MathContext::new();
    assert_eq!(
        RpnParser::parse_str(&cx, "1 sin( 2 +"),
        Err(ParseError::UnbalancedParens(Some(Function::Sin)))
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "cos( ln( 2 ) 1"),
        Err(ParseError::UnbalancedParens(Some(Function::Cos)))
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "1 )"),
        Err(ParseError::UnbalancedParens(None))
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "tan( 1 ) )"),
        Err(ParseError::UnbalancedParens(None))
    );
}

#[test]
fn test_unknown_tokens() {
    let cx = MathContext::new();
    assert_eq!(
        RpnParser::parse_str(&cx, "1 x +"),
        Err(ParseError::UnknownToken { token: format!("x"), position: 2, function: None })
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "1 ctg( 2 pi * ) +"),
        Err(ParseError::UnknownToken {
            token: format!("pi"),
            position: 2,
            function: Some(Function::Ctg),
        })
    );
    // text glued after a function's paren is not dropped
    assert_eq!(
        RpnParser::parse_str(&cx, "2 sin(p 1 ) +"),
        Err(ParseError::UnknownToken { token: format!("sin(p"), position: 2, function: None })
    );
}

#[test]
fn test_malformed_numbers() {
    let cx = MathContext::new();
    assert_eq!(
        RpnParser::parse_str(&cx, "."),
        Err(ParseError::MalformedNumber(format!(".")))
    );
    assert_eq!(
        RpnParser::parse_str(&cx, "1.2.3 1 +"),
        Err(ParseError::MalformedNumber(format!("1.2.3")))
    );
}

#[test]
fn test_nesting_limit() {
    let cx = MathContext::new().with_max_depth(3);
    assert!(RpnParser::parse_str(&cx, "sin( sin( sin( 1 ) ) )").is_ok());
    assert_eq!(
        RpnParser::parse_str(&cx, "sin( sin( sin( sin( 1 ) ) ) )"),
        Err(ParseError::TooDeep(3))
    );

    let cx = MathContext::new();
    let deep = format!("{}1{}", "ln( ".repeat(1000), " )".repeat(1000));
    assert_eq!(RpnParser::parse_str(&cx, &deep), Err(ParseError::TooDeep(64)));
}

#[test]
fn test_error_messages() {
    let err = ParseError::UnknownToken { token: format!("x"), position: 2, function: None };
    assert_eq!(err.to_string(), "Invalid operand x at position 2");
    let err = ParseError::UnbalancedParens(Some(Function::Tan));
    assert_eq!(err.to_string(), "Unmatched parentheses in function tan");
    let err = ParseError::CountMismatch { operands: 2, operators: 2, function: None };
    assert_eq!(err.to_string(), "Invalid number of operands: 2 operands for 2 operators");
}
