//! FILENAME: src/calculator.rs
//! PURPOSE: The public calculator type: symbol binding plus evaluation.
//! CONTEXT: Hosts create one `Calculator`, register variables and
//! functions, then evaluate formula strings against those bindings.
//! Evaluation takes `&self` and carries no state between calls; binding
//! takes `&mut self`. The tables are not synchronized, so concurrent use
//! of one instance must be serialized by the host (typically one
//! calculator per worker).

use crate::error::{ErrorKind, EvalError};
use crate::evaluator::Evaluator;
use crate::symbols::{Function, SymbolTable, Value};

/// An embeddable integer expression calculator.
///
/// Variables and functions share one namespace: binding a name as one
/// kind removes any binding of the other kind.
///
/// ```
/// use calc_engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.bind_var("A", 2).bind_var("B", 4);
/// assert_eq!(calc.eval("(1 + A) * B - 2").unwrap(), 10);
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    symbols: SymbolTable,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `expr` against the current bindings.
    ///
    /// This is the error-raising convenience form; [`Calculator::eval_kind`]
    /// is the non-raising query form over the same evaluation.
    pub fn eval(&self, expr: &str) -> Result<Value, EvalError> {
        log::trace!("eval {expr:?}");
        let res = Evaluator::new(&self.symbols).eval(expr);
        if let Err(err) = &res {
            log::trace!("eval {expr:?} failed: {}", err.kind);
        }
        res
    }

    /// Non-raising query form: exactly one side of the pair is populated.
    /// Suited to validation UIs where a malformed formula is expected input.
    pub fn eval_kind(&self, expr: &str) -> (Option<Value>, Option<ErrorKind>) {
        match self.eval(expr) {
            Ok(v) => (Some(v), None),
            Err(err) => (None, Some(err.kind)),
        }
    }

    /// Binds (or rebinds) a variable, evicting any function of that name.
    pub fn bind_var(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.symbols.bind_var(name, value);
        self
    }

    /// Binds a function of fixed `arity`, evicting any variable of that
    /// name. The callable receives exactly `arity` argument values.
    ///
    /// Panics if `arity` exceeds [`MAX_ARG_NUM`](crate::symbols::MAX_ARG_NUM).
    pub fn bind_fn(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        callee: impl Fn(&[Value]) -> Value + 'static,
    ) -> &mut Self {
        self.symbols.bind_fn(name, Function::new(arity, callee));
        self
    }
}
