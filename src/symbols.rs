//! FILENAME: src/symbols.rs
//! PURPOSE: Variable and function tables sharing a single namespace.
//! CONTEXT: A name denotes exactly one kind of symbol at any time.
//! Binding a name as a variable evicts any function of that name and
//! vice versa; there is no shadowing between the two tables.

use std::collections::HashMap;

/// The numeric type evaluated expressions produce.
pub type Value = i64;

/// Maximum argument count a bound function may declare.
pub const MAX_ARG_NUM: usize = 4;

/// A host-registered callable with a fixed argument count.
///
/// The arity is declared at bind time and validated on every call;
/// the callable itself always receives a slice of exactly `arity` values.
pub struct Function {
    arity: usize,
    callee: Box<dyn Fn(&[Value]) -> Value>,
}

impl Function {
    /// Wraps a callable with its declared arity.
    ///
    /// Panics if `arity` exceeds [`MAX_ARG_NUM`]; registering such a
    /// function is a host programming error.
    pub fn new(arity: usize, callee: impl Fn(&[Value]) -> Value + 'static) -> Self {
        assert!(
            arity <= MAX_ARG_NUM,
            "function arity {} exceeds MAX_ARG_NUM ({})",
            arity,
            MAX_ARG_NUM
        );
        Function {
            arity,
            callee: Box::new(callee),
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the callable. The caller has already checked `args.len()`
    /// against [`Function::arity`].
    pub fn call(&self, args: &[Value]) -> Value {
        (self.callee)(args)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// The calculator's symbol bindings: variables and functions.
#[derive(Debug, Default)]
pub struct SymbolTable {
    vars: HashMap<String, Value>,
    funcs: HashMap<String, Function>,
}

impl SymbolTable {
    /// Inserts or overwrites a variable, removing any function binding
    /// of the same name first.
    pub fn bind_var(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        self.funcs.remove(&name);
        self.vars.insert(name, value);
    }

    /// Installs a function binding, removing any variable binding of the
    /// same name first.
    pub fn bind_fn(&mut self, name: impl Into<String>, func: Function) {
        let name = name.into();
        self.vars.remove(&name);
        self.funcs.insert(name, func);
    }

    /// Looks up a variable. Names are case-sensitive.
    pub fn var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).copied()
    }

    /// Looks up a function. Names are case-sensitive.
    pub fn func(&self, name: &str) -> Option<&Function> {
        self.funcs.get(name)
    }
}
