//! FILENAME: src/lib.rs
//! PURPOSE: Library root for the calc-engine expression evaluator.
//! CONTEXT: An embeddable interpreter for user-supplied integer formulas
//! (configuration expressions, spreadsheet-like cells). The parser and
//! evaluator are fused: grammar rules scan the text and compute values
//! directly, with no token stream and no AST.
//!
//! PIPELINE: Formula String --> Cursor --> Grammar Rules --> Value
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, % (uniform precedence for *, /, %)
//! - Unary sign sequences: --x, +-x
//! - Integer literals: decimal, hex (0x/0X), binary (0b/0B)
//! - Variables: bind_var("x", 42), then eval("x * 2")
//! - Functions: bind_fn("abs", 1, ...), then eval("abs(-5)")
//! - Parentheses for grouping
//! - Precise error kinds with a fixed message vocabulary

pub mod calculator;
pub mod error;
pub mod scanner;
pub mod symbols;

mod evaluator;


// Re-export commonly used types for convenience
pub use calculator::Calculator;
pub use error::{ErrorKind, EvalError, EvalResult};
pub use symbols::{Function, Value, MAX_ARG_NUM};
