use crate::context::Context;
use crate::error::{EvalErr, SyntaxError};
use crate::parser::RPNExpr;
use crate::token::{Op, Token};

/// Carrier for algebraic rewrite rules; holds nothing yet.
pub struct SimplifyContext;

/// An expression tree. Sums and products keep their operands in two
/// groups (added/subtracted, multiplied/divided) so chains collapse into
/// one node instead of nesting per operator.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(f64),
    Variable(String),
    AddSubtract(Vec<Expr>, Vec<Expr>),
    MultiplyDivide(Vec<Expr>, Vec<Expr>),
    Exponent(Box<Expr>, Box<Expr>),
    FunctionCall(String, Vec<Expr>),
}

/// Fold a postfix expression into a tree.
///
/// Every operator variant is constructed here and nowhere else; adding an
/// operator means adding a token symbol and one arm of this match.
pub fn build(rpn: &RPNExpr) -> Result<Expr, SyntaxError> {
    let mut operands: Vec<Expr> = Vec::new();
    for token in rpn.0.iter() {
        match token {
            Token::Literal(text) => match token.number() {
                Some(num) => operands.push(Expr::Literal(num)),
                None => return Err(SyntaxError::BadNumber(text.clone())),
            },
            Token::Variable(name) => operands.push(Expr::Variable(name.clone())),
            Token::Function(name, argc) => {
                if *argc > operands.len() {
                    return Err(SyntaxError::MalformedExpr);
                }
                let args = operands.split_off(operands.len() - argc);
                operands.push(Expr::FunctionCall(name.clone(), args));
            }
            Token::Op(op) => {
                let node = match op {
                    Op::Identity => pop1(&mut operands)?,
                    Op::Negate => Expr::AddSubtract(vec![], vec![pop1(&mut operands)?]),
                    Op::Add => {
                        let [lhs, rhs] = pop2(&mut operands)?;
                        Expr::AddSubtract(vec![lhs, rhs], vec![])
                    }
                    Op::Sub => {
                        let [lhs, rhs] = pop2(&mut operands)?;
                        Expr::AddSubtract(vec![lhs], vec![rhs])
                    }
                    Op::Mul => {
                        let [lhs, rhs] = pop2(&mut operands)?;
                        Expr::MultiplyDivide(vec![lhs, rhs], vec![])
                    }
                    Op::Div => {
                        let [lhs, rhs] = pop2(&mut operands)?;
                        Expr::MultiplyDivide(vec![lhs], vec![rhs])
                    }
                    Op::Pow => {
                        let [lhs, rhs] = pop2(&mut operands)?;
                        Expr::Exponent(Box::new(lhs), Box::new(rhs))
                    }
                };
                operands.push(node);
            }
            _ => return Err(SyntaxError::MalformedExpr),
        }
    }
    let result = operands.pop().ok_or(SyntaxError::MalformedExpr)?;
    if !operands.is_empty() {
        return Err(SyntaxError::MalformedExpr);
    }
    Ok(result)
}

fn pop1(operands: &mut Vec<Expr>) -> Result<Expr, SyntaxError> {
    operands.pop().ok_or(SyntaxError::MalformedExpr)
}

fn pop2(operands: &mut Vec<Expr>) -> Result<[Expr; 2], SyntaxError> {
    let rhs = operands.pop().ok_or(SyntaxError::MalformedExpr)?;
    let lhs = operands.pop().ok_or(SyntaxError::MalformedExpr)?;
    Ok([lhs, rhs])
}

impl Expr {
    pub fn eval(&self, ctx: &mut Context) -> Result<f64, EvalErr> {
        match self {
            Expr::Literal(num) => Ok(*num),
            Expr::Variable(name) => ctx.variable(name),
            Expr::AddSubtract(added, subtracted) => {
                let mut total = 0.0;
                for expr in added {
                    total += expr.eval(ctx)?;
                }
                for expr in subtracted {
                    total -= expr.eval(ctx)?;
                }
                Ok(total)
            }
            Expr::MultiplyDivide(multiplied, divided) => {
                // either group may be empty; the product identity covers it
                let mut total = 1.0;
                for expr in multiplied {
                    total *= expr.eval(ctx)?;
                }
                for expr in divided {
                    total /= expr.eval(ctx)?;
                }
                Ok(total)
            }
            Expr::Exponent(base, power) => {
                let base = base.eval(ctx)?;
                let power = power.eval(ctx)?;
                Ok(base.powf(power))
            }
            Expr::FunctionCall(name, args) => {
                let func = ctx.function(name)?;
                func.call(name, args, ctx)
            }
        }
    }

    /// Rewrite seam for algebraic identities; returns the tree unchanged.
    pub fn simplify(self, _ctx: &SimplifyContext) -> Expr {
        self
    }
}
