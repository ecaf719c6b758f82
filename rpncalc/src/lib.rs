extern crate lexers;

// Build with the 'debug' feature to trace parsing and evaluation on stderr
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

use std::fmt;

pub use function::Function;
pub use parser::{Operand, ParseError, RPNExpr, RpnParser, Scope};
pub use rpneval::{apply_op, EvalErr, MathContext, DEFAULT_MAX_DEPTH};
pub use rpnprint::format_significant;

mod function;
mod parser;
#[cfg(test)]
mod parser_test;

mod rpneval;
mod rpnprint;

// Digits used when printing results
pub const PRECISION: usize = 15;

#[derive(Debug, PartialEq, Clone)]
pub enum RpnError {
    Parse(ParseError),
    Eval(EvalErr),
}

impl From<ParseError> for RpnError {
    fn from(e: ParseError) -> Self { RpnError::Parse(e) }
}

impl From<EvalErr> for RpnError {
    fn from(e: EvalErr) -> Self { RpnError::Eval(e) }
}

impl fmt::Display for RpnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RpnError::Parse(e) => write!(f, "{}", e),
            RpnError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RpnError {}

/// Parse and evaluate one line. Structural problems are reported before
/// any arithmetic takes place.
pub fn evaluate(cx: &MathContext, line: &str) -> Result<f64, RpnError> {
    let rpn = RpnParser::parse_str(cx, line)?;
    debug!("evaluating: {}", rpn);
    Ok(cx.eval(&rpn)?)
}
