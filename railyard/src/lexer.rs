use crate::error::{Error, LexError, SyntaxError};
use crate::token::{Op, Token};

// Scanner state: at most one buffer is live at a time, so flushing always
// emits tokens in source order.
enum State {
    Idle,
    Number(String),
    Letters(String),
}

/// Scan one input line into tokens. Whitespace is dropped up front, then
/// three fixup passes run in order: sign operators in prefix position
/// become unary, adjacency patterns get an explicit `*`, and the stream is
/// validated.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let tokens = classify(input)?;
    let tokens = convert_unary(tokens);
    let tokens = insert_implicit_mul(tokens);
    validate(&tokens)?;
    Ok(tokens)
}

fn classify(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut state = State::Idle;
    for ch in input.chars().filter(|ch| !ch.is_whitespace()) {
        state = match (state, ch) {
            (State::Number(mut buf), '0'..='9' | '.') => {
                buf.push(ch);
                State::Number(buf)
            }
            (state, '0'..='9' | '.') => {
                flush(state, &mut tokens);
                State::Number(ch.to_string())
            }
            (State::Letters(mut buf), 'a'..='z' | 'A'..='Z') => {
                buf.push(ch);
                State::Letters(buf)
            }
            (state, 'a'..='z' | 'A'..='Z') => {
                flush(state, &mut tokens);
                State::Letters(ch.to_string())
            }
            // a letter run followed by '(' is a call, not variables
            (State::Letters(buf), '(') => {
                tokens.push(Token::Function(buf, 0));
                tokens.push(Token::OParen);
                State::Idle
            }
            (state, _) => {
                flush(state, &mut tokens);
                match ch {
                    '(' => tokens.push(Token::OParen),
                    ')' => tokens.push(Token::CParen),
                    ',' => tokens.push(Token::Comma),
                    '=' => tokens.push(Token::Equals),
                    _ => match Op::from_symbol(ch) {
                        Some(op) => tokens.push(Token::Op(op)),
                        None => return Err(LexError::UnknownChar(ch)),
                    },
                }
                State::Idle
            }
        };
    }
    flush(state, &mut tokens);
    Ok(tokens)
}

fn flush(state: State, tokens: &mut Vec<Token>) {
    match state {
        State::Idle => (),
        State::Number(buf) => tokens.push(Token::Literal(buf)),
        // each letter is its own variable; only '(' makes a run a function
        State::Letters(buf) => {
            for ch in buf.chars() {
                tokens.push(Token::Variable(ch.to_string()));
            }
        }
    }
}

// A sign is unary when an operand hasn't started yet: at the front of the
// stream and after an operator, '(' or ','. An equals sign does not arm
// the flag, so `x=-3` keeps a binary minus.
fn convert_unary(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut prefix_position = true;
    for token in tokens {
        let next_flag = matches!(token, Token::Op(_) | Token::OParen | Token::Comma);
        let converted = match token {
            Token::Op(op) if prefix_position => match op.unary() {
                Some(unary) => Token::Op(unary),
                None => Token::Op(op),
            },
            other => other,
        };
        out.push(converted);
        prefix_position = next_flag;
    }
    out
}

// Insert '*' at the first adjacency that implies a product and rescan,
// until no pattern is left.
fn insert_implicit_mul(mut tokens: Vec<Token>) -> Vec<Token> {
    while let Some(at) = tokens
        .windows(2)
        .position(|pair| implied_product(&pair[0], &pair[1]))
    {
        tokens.insert(at + 1, Token::Op(Op::Mul));
    }
    tokens
}

fn implied_product(left: &Token, right: &Token) -> bool {
    matches!(
        (left, right),
        (Token::Variable(_), Token::Variable(_))
            | (Token::Variable(_), Token::OParen)
            | (Token::Literal(_), Token::Variable(_))
            | (Token::Literal(_), Token::Function(_, _))
            | (Token::Literal(_), Token::OParen)
            | (Token::CParen, Token::Variable(_))
            | (Token::CParen, Token::Literal(_))
            | (Token::CParen, Token::OParen)
            | (Token::CParen, Token::Function(_, _))
    )
}

fn validate(tokens: &[Token]) -> Result<(), SyntaxError> {
    let first = match tokens.first() {
        Some(token) => token,
        None => return Err(SyntaxError::EmptyExpr),
    };
    if matches!(first, Token::CParen | Token::Comma) {
        return Err(SyntaxError::MisplacedToken(first.clone()));
    }
    let opens = tokens.iter().filter(|t| **t == Token::OParen).count();
    let closes = tokens.iter().filter(|t| **t == Token::CParen).count();
    if opens != closes {
        return Err(SyntaxError::UnbalancedParens);
    }
    for pair in tokens.windows(2) {
        // `x5` has no product pattern and no other reading
        if let (Token::Variable(_), Token::Literal(_)) = (&pair[0], &pair[1]) {
            return Err(SyntaxError::AdjacentValues(pair[0].clone(), pair[1].clone()));
        }
    }
    for token in tokens {
        if let Token::Literal(text) = token {
            if token.number().is_none() {
                return Err(SyntaxError::BadNumber(text.clone()));
            }
        }
    }
    Ok(())
}
