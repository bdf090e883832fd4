/// Operator associativity, used to decide pops during infix-to-postfix
/// conversion. Unary operators don't take part in that contest.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

/// The operators the engine knows. Precedence, associativity and the
/// binary-to-prefix pairing are lookups on the tag; AST construction
/// switches on it in a single place (`ast::build`).
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Op {
    Identity,
    Negate,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Op {
    /// Binary operator for a source character.
    pub fn from_symbol(ch: char) -> Option<Op> {
        match ch {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            '^' => Some(Op::Pow),
            _ => None,
        }
    }

    pub fn precedence(&self) -> usize {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Identity | Op::Negate => 3,
            Op::Pow => 4,
        }
    }

    pub fn assoc(&self) -> Assoc {
        match self {
            Op::Pow => Assoc::Right,
            Op::Identity | Op::Negate => Assoc::None,
            _ => Assoc::Left,
        }
    }

    /// Prefix counterpart of a sign operator: `+` binds to `Identity`,
    /// `-` to `Negate`. Other operators have none.
    pub fn unary(&self) -> Option<Op> {
        match self {
            Op::Add => Some(Op::Identity),
            Op::Sub => Some(Op::Negate),
            _ => None,
        }
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Op::Identity | Op::Negate)
    }
}

/// Lexer output. `Literal` keeps the scanned text; its numeric value is a
/// derived view. Function arity is a placeholder 0 until the postfix
/// converter resolves it by counting commas.
#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Literal(String),
    Variable(String),
    Function(String, usize), // arity
    Op(Op),
    OParen,
    CParen,
    Comma,
    Equals,
}

impl Token {
    /// Numeric view of a literal's text.
    pub fn number(&self) -> Option<f64> {
        match self {
            Token::Literal(text) => text.parse().ok(),
            _ => None,
        }
    }
}
