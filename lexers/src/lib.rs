mod scanner;
mod rpn_tokenizer;

pub use scanner::Scanner;
pub use rpn_tokenizer::{RpnToken, RpnTokenizer, FUNCTIONS};
