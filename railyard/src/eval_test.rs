use crate::ast::{build, Expr, SimplifyContext};
use crate::context::Context;
use crate::error::{EvalErr, SyntaxError};
use crate::lexer::tokenize;
use crate::parser::{parse, RPNExpr};
use crate::token::Token;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10)
    };
}

fn compile(input: &str) -> Expr {
    build(&parse(&tokenize(input).unwrap()).unwrap()).unwrap()
}

fn eval_str(input: &str, ctx: &mut Context) -> Result<f64, EvalErr> {
    compile(input).eval(ctx)
}

#[test]
fn arithmetic() {
    let mut ctx = Context::new();
    fuzzy_eq!(eval_str("3+4*2", &mut ctx).unwrap(), 11.0);
    fuzzy_eq!(eval_str("(2+3)*4", &mut ctx).unwrap(), 20.0);
    fuzzy_eq!(eval_str("10/4", &mut ctx).unwrap(), 2.5);
    fuzzy_eq!(eval_str("2-3+4", &mut ctx).unwrap(), 3.0);
    fuzzy_eq!(eval_str("2^3^2", &mut ctx).unwrap(), 512.0);
}

#[test]
fn signs_and_powers() {
    let mut ctx = Context::new();
    fuzzy_eq!(eval_str("2^3", &mut ctx).unwrap(), 8.0);
    fuzzy_eq!(eval_str("2^-3", &mut ctx).unwrap(), 0.125);
    fuzzy_eq!(eval_str("-2^3", &mut ctx).unwrap(), -8.0);
    fuzzy_eq!(eval_str("-2^-3", &mut ctx).unwrap(), -0.125);
    fuzzy_eq!(eval_str("-3^4", &mut ctx).unwrap(), -81.0);
    fuzzy_eq!(eval_str("(-3)^4", &mut ctx).unwrap(), 81.0);
    fuzzy_eq!(eval_str("+3", &mut ctx).unwrap(), 3.0);
    fuzzy_eq!(eval_str("--3", &mut ctx).unwrap(), 3.0);
}

#[test]
fn implied_products_evaluate() {
    let mut ctx = Context::new();
    fuzzy_eq!(eval_str("2(3)", &mut ctx).unwrap(), 6.0);
    fuzzy_eq!(eval_str("(1)(2)(3)", &mut ctx).unwrap(), 6.0);
    ctx.setvar("x", 4.0);
    fuzzy_eq!(eval_str("2x", &mut ctx).unwrap(), 8.0);
}

#[test]
fn variables_resolve_from_globals() {
    let mut ctx = Context::new();
    ctx.setvar("x", 5.0);
    fuzzy_eq!(eval_str("x^2", &mut ctx).unwrap(), 25.0);
    assert_eq!(
        eval_str("q", &mut ctx),
        Err(EvalErr::UnresolvedVariable("q".to_string()))
    );
}

#[test]
fn calls_bind_positionally() {
    let mut ctx = Context::new();
    let body = compile("x^y");
    ctx.add_function("pow", vec!["x".to_string(), "y".to_string()], body);
    fuzzy_eq!(eval_str("pow(2,5)", &mut ctx).unwrap(), 32.0);
    fuzzy_eq!(eval_str("pow(5,2)", &mut ctx).unwrap(), 25.0);
}

#[test]
fn arity_is_checked_before_binding() {
    let mut ctx = Context::new();
    ctx.add_function("pow", vec!["x".to_string(), "y".to_string()], compile("x^y"));
    assert_eq!(
        eval_str("pow(2)", &mut ctx),
        Err(EvalErr::ArityMismatch("pow".to_string(), 2, 1))
    );
    assert_eq!(
        eval_str("pow(2,3,4)", &mut ctx),
        Err(EvalErr::ArityMismatch("pow".to_string(), 2, 3))
    );
}

#[test]
fn zero_parameter_calls() {
    let mut ctx = Context::new();
    ctx.add_function("seven", vec![], Expr::Literal(7.0));
    fuzzy_eq!(eval_str("seven()", &mut ctx).unwrap(), 7.0);
    assert_eq!(
        eval_str("missing()", &mut ctx),
        Err(EvalErr::UnresolvedFunction("missing".to_string()))
    );
}

#[test]
fn frames_do_not_fall_back_to_globals() {
    let mut ctx = Context::new();
    ctx.setvar("a", 5.0);
    ctx.add_function("f", vec!["b".to_string()], compile("a*b"));
    assert_eq!(
        eval_str("f(2)", &mut ctx),
        Err(EvalErr::UnresolvedVariable("a".to_string()))
    );
    // the frame came off despite the failure
    fuzzy_eq!(eval_str("a", &mut ctx).unwrap(), 5.0);
}

#[test]
fn arguments_evaluate_in_the_caller_scope() {
    let mut ctx = Context::new();
    ctx.setvar("a", 3.0);
    ctx.add_function("f", vec!["x".to_string()], compile("x^2"));
    fuzzy_eq!(eval_str("f(a+1)", &mut ctx).unwrap(), 16.0);
}

#[test]
fn nested_calls_stack_frames() {
    let mut ctx = Context::new();
    ctx.add_function("g", vec!["x".to_string()], compile("x+1"));
    ctx.add_function("f", vec!["x".to_string()], compile("g(x*2)"));
    fuzzy_eq!(eval_str("f(3)", &mut ctx).unwrap(), 7.0);
}

#[test]
fn simplify_returns_the_tree_unchanged() {
    let expr = compile("2x+f(y)^2");
    assert_eq!(expr.clone().simplify(&SimplifyContext), expr);
}

#[test]
fn malformed_postfix_is_an_error() {
    let rpn = parse(&tokenize("*5").unwrap()).unwrap();
    assert_eq!(build(&rpn), Err(SyntaxError::MalformedExpr));

    assert_eq!(build(&RPNExpr(vec![])), Err(SyntaxError::MalformedExpr));

    let leftover = RPNExpr(vec![
        Token::Literal("1".to_string()),
        Token::Literal("2".to_string()),
    ]);
    assert_eq!(build(&leftover), Err(SyntaxError::MalformedExpr));
}
