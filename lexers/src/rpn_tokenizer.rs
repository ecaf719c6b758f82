#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
static OPERATORS: &[char] = &['+', '-', '*', '/'];

pub const FUNCTIONS: &[&str] = &["sin", "cos", "tan", "ctg", "ln"];

#[derive(Clone, PartialEq, Debug)]
pub enum RpnToken {
    Unknown(String),
    Number(String),
    Constant(char),
    Operator(String),
    FunctionOpen(String),
    FunctionClose,
}

impl RpnToken {
    // Classification looks at the word as a whole. Anything starting with an
    // operator char is an operator, even '-5' or '+x'.
    pub fn classify(word: &str) -> RpnToken {
        let mut chars = Scanner::new(word.chars());
        if chars.accept_any(OPERATORS).is_some() {
            return RpnToken::Operator(word.to_string());
        }
        if let Some(func) = FUNCTIONS.iter().find(|f| Self::opens_call(word, f)) {
            return RpnToken::FunctionOpen(func.to_string());
        }
        if word == ")" {
            return RpnToken::FunctionClose;
        }
        if chars.consists_of(NUMERIC) {
            return RpnToken::Number(word.to_string());
        }
        match word {
            "e" => RpnToken::Constant('e'),
            "p" => RpnToken::Constant('p'),
            _ => RpnToken::Unknown(word.to_string()),
        }
    }

    // only the bare 'sin(' opens a call, 'sin(p' is not a token we know
    fn opens_call(word: &str, func: &str) -> bool {
        word.strip_prefix(func) == Some("(")
    }
}

impl fmt::Display for RpnToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RpnToken::Unknown(word) | RpnToken::Number(word) | RpnToken::Operator(word) => {
                write!(f, "{}", word)
            }
            RpnToken::Constant(c) => write!(f, "{}", c),
            RpnToken::FunctionOpen(func) => write!(f, "{}(", func),
            RpnToken::FunctionClose => write!(f, ")"),
        }
    }
}

// Splits input on whitespace runs and classifies each word
pub struct RpnTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> RpnTokenizer<I> {
    pub fn new(source: I) -> Self {
        RpnTokenizer { src: Scanner::new(source) }
    }
}

impl<I: Iterator<Item=char>> Iterator for RpnTokenizer<I> {
    type Item = RpnToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.scan_word().map(|word| RpnToken::classify(&word))
    }
}

///////////////////////////////////////////////////////////////////////////////
