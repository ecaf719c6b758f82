use crate::rpneval::EvalErr;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

// Trig results closer than this to one of the function's zeros are
// reported as exactly 0.0
const SNAP_EPSILON: f64 = 1e-12;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Ctg,
    Ln,
}

impl FromStr for Function {
    type Err = String;
    fn from_str(name: &str) -> Result<Function, String> {
        match name {
            "sin" => Ok(Function::Sin),
            "cos" => Ok(Function::Cos),
            "tan" => Ok(Function::Tan),
            "ctg" => Ok(Function::Ctg),
            "ln" => Ok(Function::Ln),
            _ => Err(format!("Unknown function {}", name)),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Ctg => "ctg",
            Function::Ln => "ln",
        };
        write!(f, "{}", name)
    }
}

// Is x within SNAP_EPSILON of phase + k * period for some integer k?
fn near(x: f64, period: f64, phase: f64) -> bool {
    let rem = ((x - phase) % period).abs();
    rem < SNAP_EPSILON || (rem - period).abs() < SNAP_EPSILON
}

impl Function {
    pub fn apply(self, x: f64) -> Result<f64, EvalErr> {
        match self {
            Function::Sin if near(x, PI, 0.0) => Ok(0.0),
            Function::Sin => Ok(x.sin()),
            Function::Cos if near(x, PI, FRAC_PI_2) => Ok(0.0),
            Function::Cos => Ok(x.cos()),
            Function::Tan if near(x, PI, 0.0) => Ok(0.0),
            Function::Tan => Ok(x.tan()),
            // poles at k*pi, where sin snaps to 0
            Function::Ctg if near(x, PI, 0.0) => Err(EvalErr::InvalidArgument(self, x)),
            Function::Ctg if near(x, PI, FRAC_PI_2) => Ok(0.0),
            Function::Ctg => Ok(1.0 / x.tan()),
            Function::Ln if x <= 0.0 => Err(EvalErr::InvalidArgument(self, x)),
            Function::Ln => Ok(x.ln()),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
