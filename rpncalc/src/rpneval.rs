use crate::function::Function;
use crate::parser::{Operand, ParseError, RPNExpr, Scope};
use lexers::RpnToken;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub enum EvalErr {
    DivisionByZero,
    UnknownOperator(String),
    InvalidArgument(Function, f64),
    InsufficientOperands,
    UnusedOperands(usize),
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EvalErr::DivisionByZero => write!(f, "Division by zero"),
            EvalErr::UnknownOperator(op) => write!(f, "Unknown operator {}", op),
            EvalErr::InvalidArgument(func, x) => {
                write!(f, "Invalid argument for {}: {}", func, x)
            }
            EvalErr::InsufficientOperands => {
                write!(f, "Insufficient operands or empty operator stack")
            }
            EvalErr::UnusedOperands(n) => write!(f, "{} operands left without operator", n),
        }
    }
}

impl std::error::Error for EvalErr {}

pub const DEFAULT_MAX_DEPTH: usize = 64;

pub struct MathContext {
    pub constants: HashMap<char, f64>,
    // deepest allowed function nesting
    pub max_depth: usize,
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::new()
    }
}

impl MathContext {
    pub fn new() -> MathContext {
        use std::f64::consts;
        let mut constants = HashMap::new();
        constants.insert('p', consts::PI);
        constants.insert('e', consts::E);
        MathContext { constants, max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> MathContext {
        self.max_depth = max_depth;
        self
    }

    // Value of a literal or constant token, None for tokens that aren't
    // operands at all.
    pub fn resolve(&self, token: &RpnToken) -> Result<Option<f64>, ParseError> {
        match token {
            RpnToken::Number(num) => f64::from_str(num)
                .map(Some)
                .map_err(|_| ParseError::MalformedNumber(num.clone())),
            RpnToken::Constant(c) => Ok(self.constants.get(c).copied()),
            _ => Ok(None),
        }
    }

    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        self.eval_scope(&rpn.0)
    }

    // Drain the operator stack from the top, each operator taking the two
    // topmost operands. Nested calls are reduced first, in operand order.
    fn eval_scope(&self, scope: &Scope) -> Result<f64, EvalErr> {
        let mut operands = Vec::with_capacity(scope.operands.len());
        for operand in scope.operands.iter() {
            match operand {
                Operand::Number(num) => operands.push(*num),
                Operand::Call(func, arg) => {
                    let x = self.eval_scope(arg)?;
                    let fx = func.apply(x)?;
                    debug!("{}({}) = {}", func, x, fx);
                    operands.push(fx);
                }
            }
        }

        let mut operators = scope.operators.iter().map(String::as_str).collect::<Vec<_>>();
        while let Some(op) = operators.pop() {
            let r = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
            let l = operands.pop().ok_or(EvalErr::InsufficientOperands)?;
            let result = apply_op(l, r, op)?;
            debug!("{} {} {} = {}", l, op, r, result);
            operands.push(result);
        }

        match operands.len() {
            1 => operands.pop().ok_or(EvalErr::InsufficientOperands),
            0 => Err(EvalErr::InsufficientOperands),
            n => Err(EvalErr::UnusedOperands(n)),
        }
    }
}

// l is the operand pushed first
pub fn apply_op(l: f64, r: f64, op: &str) -> Result<f64, EvalErr> {
    match op {
        "+" => Ok(l + r),
        "-" => Ok(l - r),
        "*" => Ok(l * r),
        "/" if r == 0.0 => Err(EvalErr::DivisionByZero),
        "/" => Ok(l / r),
        _ => Err(EvalErr::UnknownOperator(op.to_string())),
    }
}
