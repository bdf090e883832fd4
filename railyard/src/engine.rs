use crate::ast;
use crate::context::Context;
use crate::error::Error;
use crate::lexer;
use crate::parser::{self, RPNExpr};
use crate::token::Token;

/// Evaluate one input line against the session context.
///
/// A line is either a plain expression, an assignment `x=expr`, or a
/// function definition `f(a,b)=expr`. Expressions and assignments yield
/// the computed value; definitions yield `None`. The context is touched
/// only after the right-hand side has been built (and, for assignments,
/// evaluated), so a failing line leaves the session as it was.
pub fn evaluate(input: &str, ctx: &mut Context) -> Result<Option<f64>, Error> {
    let tokens = lexer::tokenize(input)?;
    let segments = tokens
        .split(|token| *token == Token::Equals)
        .map(parser::parse)
        .collect::<Result<Vec<_>, _>>()?;
    match segments.as_slice() {
        [expr] => {
            let tree = ast::build(expr)?;
            Ok(Some(tree.eval(ctx)?))
        }
        [target, value] => define(target, value, ctx),
        _ => Err(Error::MultipleAssignment),
    }
}

// One '=': the left side decides between assignment and definition by its
// postfix shape. A lone variable assigns; parameters then a function
// token define. Anything else isn't a valid target.
fn define(target: &RPNExpr, value: &RPNExpr, ctx: &mut Context) -> Result<Option<f64>, Error> {
    let body = ast::build(value)?;
    match target.0.as_slice() {
        [Token::Variable(name)] => {
            let result = body.eval(ctx)?;
            ctx.setvar(name, result);
            Ok(Some(result))
        }
        [params @ .., Token::Function(name, _)] => match param_names(params) {
            Some(params) => {
                ctx.add_function(name, params, body);
                Ok(None)
            }
            None => Err(Error::InvalidDefinition),
        },
        _ => Err(Error::InvalidDefinition),
    }
}

// Parameter lists are one or more plain variables; anything else (an
// empty list, an expression among the parameters) disqualifies the
// definition.
fn param_names(tokens: &[Token]) -> Option<Vec<String>> {
    if tokens.is_empty() {
        return None;
    }
    tokens
        .iter()
        .map(|token| match token {
            Token::Variable(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}
