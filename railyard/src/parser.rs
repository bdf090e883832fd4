use crate::error::SyntaxError;
use crate::token::{Assoc, Token};

/// An expression in postfix order, ready for tree building or printing.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<Token>);

/// Convert one infix token segment to postfix order.
///
/// Plain shunting-yard extended with a call-arity stack: every function
/// push pairs with an arity entry starting at 1, commas drain pending
/// operators to the enclosing '(' and bump the innermost entry, and the
/// matching ')' pops the entry and rewrites the function token with the
/// final count. The entry is consumed even for an empty call, where the
/// count is corrected to 0, so sibling arguments of an enclosing call are
/// never credited to a stale entry.
pub fn parse(tokens: &[Token]) -> Result<RPNExpr, SyntaxError> {
    let mut out = Vec::new();
    let mut stack: Vec<Token> = Vec::new();
    let mut arity = Vec::<usize>::new();

    for (at, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(_) | Token::Variable(_) => out.push(token.clone()),
            Token::OParen => stack.push(token.clone()),
            Token::Function(_, _) => {
                stack.push(token.clone());
                arity.push(1);
            }
            Token::Comma => {
                while !stack.is_empty() && stack.last() != Some(&Token::OParen) {
                    out.push(stack.pop().unwrap());
                }
                if stack.is_empty() {
                    return Err(SyntaxError::MisplacedComma);
                }
                match arity.last_mut() {
                    Some(argc) => *argc += 1,
                    None => return Err(SyntaxError::MisplacedComma),
                }
            }
            Token::CParen => {
                while !stack.is_empty() && stack.last() != Some(&Token::OParen) {
                    out.push(stack.pop().unwrap());
                }
                if stack.pop() != Some(Token::OParen) {
                    return Err(SyntaxError::MissingOParen);
                }
                match stack.pop() {
                    Some(Token::Function(func, _)) => {
                        let argc = arity.pop().ok_or(SyntaxError::MalformedExpr)?;
                        let empty_call = at > 0 && tokens[at - 1] == Token::OParen;
                        out.push(Token::Function(func, if empty_call { 0 } else { argc }));
                    }
                    Some(other) => stack.push(other),
                    None => (),
                }
            }
            Token::Op(op) => {
                // unary operators never displace anything already stacked
                if !op.is_unary() {
                    while let Some(&Token::Op(top)) = stack.last() {
                        let pops = top.precedence() > op.precedence()
                            || (top.precedence() == op.precedence() && op.assoc() == Assoc::Left);
                        if !pops {
                            break;
                        }
                        out.push(Token::Op(top));
                        stack.pop();
                    }
                }
                stack.push(token.clone());
            }
            Token::Equals => return Err(SyntaxError::MisplacedToken(token.clone())),
        }
    }
    while let Some(top) = stack.pop() {
        match top {
            Token::OParen => return Err(SyntaxError::MissingCParen),
            token => out.push(token),
        }
    }
    Ok(RPNExpr(out))
}
