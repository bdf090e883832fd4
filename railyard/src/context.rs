use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Expr;
use crate::error::EvalErr;

/// A user-defined function: parameter names plus the unevaluated body.
/// Stored behind `Rc` so a call can run against the same context that
/// owns the table.
#[derive(Clone, Debug)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: Expr,
}

impl FunctionDef {
    /// Apply the function: check arity, evaluate arguments in the
    /// caller's scope, then evaluate the body with a fresh frame binding
    /// each parameter positionally.
    pub fn call(&self, name: &str, args: &[Expr], ctx: &mut Context) -> Result<f64, EvalErr> {
        if args.len() != self.params.len() {
            return Err(EvalErr::ArityMismatch(
                name.to_string(),
                self.params.len(),
                args.len(),
            ));
        }
        let mut frame = HashMap::new();
        for (param, arg) in self.params.iter().zip(args) {
            frame.insert(param.clone(), arg.eval(ctx)?);
        }
        ctx.with_frame(frame, |ctx| self.body.eval(ctx))
    }
}

/// Session state threaded through evaluation by the caller. Assignments
/// and definitions accumulate here across input lines.
pub struct Context {
    globals: HashMap<String, f64>,
    locals: Vec<HashMap<String, f64>>,
    functions: HashMap<String, Rc<FunctionDef>>,
}

impl Context {
    pub fn new() -> Context {
        Context {
            globals: HashMap::new(),
            locals: Vec::new(),
            functions: HashMap::new(),
        }
    }

    /// Resolve a variable. Inside a call only the innermost frame is
    /// consulted; a miss there is an error even if a global of the same
    /// name exists.
    pub fn variable(&self, name: &str) -> Result<f64, EvalErr> {
        let scope = self.locals.last().unwrap_or(&self.globals);
        match scope.get(name) {
            Some(value) => Ok(*value),
            None => Err(EvalErr::UnresolvedVariable(name.to_string())),
        }
    }

    pub fn function(&self, name: &str) -> Result<Rc<FunctionDef>, EvalErr> {
        match self.functions.get(name) {
            Some(func) => Ok(func.clone()),
            None => Err(EvalErr::UnresolvedFunction(name.to_string())),
        }
    }

    /// Insert or overwrite a global binding. Also the hook for seeding
    /// constants like `pi` before a session.
    pub fn setvar(&mut self, name: &str, value: f64) {
        self.globals.insert(name.to_string(), value);
    }

    /// Insert or overwrite a function definition.
    pub fn add_function(&mut self, name: &str, params: Vec<String>, body: Expr) {
        self.functions
            .insert(name.to_string(), Rc::new(FunctionDef { params, body }));
    }

    /// Run `body` with `frame` pushed as the innermost scope. The frame
    /// comes back off on every exit path, error returns included.
    pub fn with_frame<T>(
        &mut self,
        frame: HashMap<String, f64>,
        body: impl FnOnce(&mut Context) -> T,
    ) -> T {
        self.locals.push(frame);
        let result = body(self);
        self.locals.pop();
        result
    }
}
