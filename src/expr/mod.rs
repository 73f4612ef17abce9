// Expression trees, text syntax, and rendering

pub mod eval;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use eval::EvalError;
pub use format::{FormatOptions, OperatorStyle, ParenStyle, format_expr};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use tree::Expr;
