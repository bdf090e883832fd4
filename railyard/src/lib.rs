#![deny(warnings)]

mod token;
pub use crate::token::{Assoc, Op, Token};

mod lexer;
pub use crate::lexer::tokenize;

mod parser;
pub use crate::parser::{parse, RPNExpr};

mod ast;
pub use crate::ast::{build, Expr, SimplifyContext};

mod context;
pub use crate::context::{Context, FunctionDef};
#[cfg(test)]
mod eval_test;

mod engine;
pub use crate::engine::evaluate;

mod error;
pub use crate::error::{Error, EvalErr, LexError, SyntaxError};
