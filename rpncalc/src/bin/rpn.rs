extern crate rpncalc;

use rpncalc::MathContext;
use std::process::ExitCode;

const BANNER: &str = "RPN calculator: write operands first, then operators, \
    separated by spaces (eg: 3 4 + 2 *). p stands for pi and e for Euler's number. \
    Functions sin, cos, tan, ctg and ln take an RPN argument: sin( p 2 / )";

fn report(cx: &MathContext, input: &str) -> ExitCode {
    match rpncalc::evaluate(cx, input) {
        Ok(result) => {
            println!("{}", rpncalc::format_significant(result, rpncalc::PRECISION));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_line() -> Result<String, String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    match rl.readline("") {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            Err(format!("No expression given"))
        }
        Err(e) => Err(format!("Readline err: {:?}", e)),
    }
}

fn main() -> ExitCode {
    let cx = MathContext::new();
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        return report(&cx, &input);
    }
    println!("{}", BANNER);
    match read_line() {
        Ok(line) => report(&cx, &line),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
