use crate::parser::{Operand, RPNExpr, Scope};
use std::fmt;

// Scopes print operands first and then operators in push order. When every
// number is finite, parsing the output again yields the same stacks. Literals
// that overflow print as 'inf', which doesn't parse back.
impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let words = self.operands.iter()
            .map(|operand| match operand {
                Operand::Number(num) => format!("{}", num),
                Operand::Call(func, arg) => format!("{}( {} )", func, arg),
            })
            .chain(self.operators.iter().cloned())
            .collect::<Vec<String>>();
        write!(f, "{}", words.join(" "))
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn trim_fraction(num: &str) -> &str {
    if num.contains('.') {
        num.trim_end_matches('0').trim_end_matches('.')
    } else {
        num
    }
}

// Render like printf's %.<digits>g: fixed notation unless the exponent is
// below -4 or not smaller than the precision, trailing zeros dropped.
pub fn format_significant(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return format!("nan");
    }
    if x.is_infinite() {
        return format!("{}inf", if x < 0.0 { "-" } else { "" });
    }
    if x == 0.0 {
        return format!("{}0", if x.is_sign_negative() { "-" } else { "" });
    }
    let digits = digits.max(1);
    // rounding to the requested digits may bump the exponent (9.99 -> 1e1)
    let sci = format!("{:.*e}", digits - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

///////////////////////////////////////////////////////////////////////////////
