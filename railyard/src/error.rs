use crate::token::Token;

/// Character-level failures while scanning input text.
#[derive(Clone, PartialEq, Debug)]
pub enum LexError {
    UnknownChar(char),
}

/// Structural failures: the token stream doesn't form an expression.
#[derive(Clone, PartialEq, Debug)]
pub enum SyntaxError {
    EmptyExpr,
    MisplacedToken(Token),
    UnbalancedParens,
    AdjacentValues(Token, Token),
    BadNumber(String),
    MissingOParen,
    MissingCParen,
    MisplacedComma,
    MalformedExpr,
}

/// Failures while evaluating a well-formed tree against a context.
#[derive(Clone, PartialEq, Debug)]
pub enum EvalErr {
    UnresolvedVariable(String),
    UnresolvedFunction(String),
    // function name, declared parameter count, supplied argument count
    ArityMismatch(String, usize, usize),
}

/// Anything one input line can fail with.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    Lex(LexError),
    Syntax(SyntaxError),
    Eval(EvalErr),
    InvalidDefinition,
    MultipleAssignment,
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Error {
        Error::Lex(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Error {
        Error::Syntax(err)
    }
}

impl From<EvalErr> for Error {
    fn from(err: EvalErr) -> Error {
        Error::Eval(err)
    }
}
