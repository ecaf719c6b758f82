use crate::function::Function;
use crate::rpneval::MathContext;
use lexers::{RpnToken, RpnTokenizer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub enum ParseError {
    MalformedNumber(String),
    // position is 1-based among the operands of the enclosing scope
    UnknownToken { token: String, position: usize, function: Option<Function> },
    UnbalancedParens(Option<Function>),
    CountMismatch { operands: usize, operators: usize, function: Option<Function> },
    TooDeep(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::MalformedNumber(num) => write!(f, "Malformed number {}", num),
            ParseError::UnknownToken { token, function: Some(func), .. } => {
                write!(f, "Invalid operand {} in function {}", token, func)
            }
            ParseError::UnknownToken { token, position, function: None } => {
                write!(f, "Invalid operand {} at position {}", token, position)
            }
            ParseError::UnbalancedParens(Some(func)) => {
                write!(f, "Unmatched parentheses in function {}", func)
            }
            ParseError::UnbalancedParens(None) => write!(f, "Unmatched closing parenthesis"),
            ParseError::CountMismatch { operands, operators, function } => {
                write!(f, "Invalid number of operands: {} operands for {} operators",
                       operands, operators)?;
                match function {
                    Some(func) => write!(f, " in function {}", func),
                    None => Ok(()),
                }
            }
            ParseError::TooDeep(max) => {
                write!(f, "Functions nested deeper than {} levels", max)
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(PartialEq, Debug, Clone)]
pub enum Operand {
    Number(f64),
    Call(Function, Scope),
}

// Pending operands and operators of one RPN expression: the whole line or
// the argument of a function call. Both are stacks, top is the last element.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Scope {
    pub operands: Vec<Operand>,
    pub operators: Vec<String>,
}

#[derive(PartialEq, Debug)]
pub struct RPNExpr(pub Scope);

pub struct RpnParser<'a> {
    cx: &'a MathContext,
    tokens: Vec<RpnToken>,
    cursor: usize,
}

impl<'a> RpnParser<'a> {
    pub fn parse_str(cx: &MathContext, expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(cx, RpnTokenizer::new(expr.chars()))
    }

    pub fn parse(cx: &MathContext, lex: impl Iterator<Item = RpnToken>)
        -> Result<RPNExpr, ParseError>
    {
        let mut parser = RpnParser { cx, tokens: lex.collect(), cursor: 0 };
        let scope = parser.parse_scope(None, 0)?;
        Ok(RPNExpr(scope))
    }

    // Consume tokens into a fresh scope. A nested scope ends at its ')',
    // the outermost one when tokens run out.
    fn parse_scope(&mut self, function: Option<Function>, depth: usize)
        -> Result<Scope, ParseError>
    {
        if depth > self.cx.max_depth {
            return Err(ParseError::TooDeep(self.cx.max_depth));
        }
        let mut scope = Scope::default();
        let mut closed = false;

        while let Some(token) = self.tokens.get(self.cursor).cloned() {
            self.cursor += 1;
            match token {
                RpnToken::Operator(op) => scope.operators.push(op),
                RpnToken::FunctionOpen(name) => {
                    let func = Function::from_str(&name).map_err(|_| ParseError::UnknownToken {
                        token: name.clone(),
                        position: scope.operands.len() + 1,
                        function,
                    })?;
                    let arg = self.parse_scope(Some(func), depth + 1)?;
                    scope.operands.push(Operand::Call(func, arg));
                }
                RpnToken::FunctionClose if function.is_some() => {
                    closed = true;
                    break;
                }
                RpnToken::FunctionClose => return Err(ParseError::UnbalancedParens(None)),
                RpnToken::Unknown(word) => {
                    return Err(ParseError::UnknownToken {
                        token: word,
                        position: scope.operands.len() + 1,
                        function,
                    })
                }
                operand => match self.cx.resolve(&operand)? {
                    Some(value) => scope.operands.push(Operand::Number(value)),
                    None => {
                        return Err(ParseError::UnknownToken {
                            token: operand.to_string(),
                            position: scope.operands.len() + 1,
                            function,
                        })
                    }
                },
            }
        }

        if function.is_some() && !closed {
            return Err(ParseError::UnbalancedParens(function));
        }
        if scope.operands.len() != scope.operators.len() + 1 {
            return Err(ParseError::CountMismatch {
                operands: scope.operands.len(),
                operators: scope.operators.len(),
                function,
            });
        }
        debug!("parsed scope at depth {}: {}", depth, scope);
        Ok(scope)
    }
}
