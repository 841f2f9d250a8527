//! FILENAME: src/evaluator.rs
//! PURPOSE: Fused recursive-descent parser and evaluator for expressions.
//! CONTEXT: There is no token stream and no AST. Each grammar rule scans
//! the input directly through the [`Cursor`] and produces the computed
//! value of its sub-expression. Identifier resolution happens during the
//! parse: a name found in the variable table resolves on the spot, an
//! unresolved name is deferred one token so the postfix rule can test it
//! against the function table when `(` follows.
//!
//! GRAMMAR:
//!   addsub     --> muldiv ( ("+" | "-") muldiv )*
//!   muldiv     --> unary ( ("*" | "/" | "%") unary )*
//!   unary      --> ("+" | "-")* postfix
//!   postfix    --> primary ( "(" arguments? ")" )?
//!   arguments  --> addsub ( "," addsub )*
//!   primary    --> "(" addsub ")" | integer | identifier
//!   integer    --> [0-9]+ | ("0x"|"0X") [0-9a-fA-F]+ | ("0b"|"0B") [01]+
//!   identifier --> [a-zA-Z] [a-zA-Z0-9]*

use crate::error::{ErrorKind, EvalResult};
use crate::scanner::{is_alnum, is_alpha, is_digit, Cursor};
use crate::symbols::{SymbolTable, Value};

/// Outcome of the primary rule: either a fully resolved value, or an
/// identifier whose meaning the postfix rule decides.
enum Operand {
    Value(Value),
    Pending(String),
}

/// Grammar evaluator borrowing the calculator's symbol tables for the
/// duration of one `eval` call. All per-call state lives in the `Cursor`
/// threaded through the rules, so the evaluator is reentrant.
pub(crate) struct Evaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(symbols: &'a SymbolTable) -> Self {
        Evaluator { symbols }
    }

    /// Evaluates the whole expression. Trailing non-whitespace input is a
    /// syntax error even when a valid prefix already evaluated.
    pub(crate) fn eval(&self, expr: &str) -> EvalResult<Value> {
        let mut cur = Cursor::new(expr);
        let res = self.eval_addsub(&mut cur)?;
        if cur.eat_ws() {
            return Err(ErrorKind::SyntaxError.into());
        }
        Ok(res)
    }

    /// addsub --> muldiv ( ("+" | "-") muldiv )*
    fn eval_addsub(&self, cur: &mut Cursor) -> EvalResult<Value> {
        let mut res = self.eval_muldiv(cur)?;
        while cur.eat_ws() {
            let op = match cur.consume_any(b"+-") {
                Some(op) => op,
                None => break,
            };
            let rhs = self.eval_muldiv(cur)?;
            res = if op == b'+' {
                res.wrapping_add(rhs)
            } else {
                res.wrapping_sub(rhs)
            };
        }
        Ok(res)
    }

    /// muldiv --> unary ( ("*" | "/" | "%") unary )*
    ///
    /// Uniform precedence among the three operators, left-associative.
    /// A zero right operand of `/` or `%` is rejected before the native
    /// division runs, regardless of the dividend's sign.
    fn eval_muldiv(&self, cur: &mut Cursor) -> EvalResult<Value> {
        let mut res = self.eval_unary(cur)?;
        while cur.eat_ws() {
            let op = match cur.consume_any(b"*/%") {
                Some(op) => op,
                None => break,
            };
            let rhs = self.eval_unary(cur)?;
            if op == b'*' {
                res = res.wrapping_mul(rhs);
            } else {
                if rhs == 0 {
                    return Err(ErrorKind::DivideByZero.into());
                }
                // wrapping_div/_rem so Value::MIN / -1 cannot panic
                res = if op == b'/' {
                    res.wrapping_div(rhs)
                } else {
                    res.wrapping_rem(rhs)
                };
            }
        }
        Ok(res)
    }

    /// unary --> ("+" | "-")* postfix
    ///
    /// Signs compose: an even count of `-` cancels out, `+` is a no-op.
    /// Running out of input mid-sign-sequence is a syntax error.
    fn eval_unary(&self, cur: &mut Cursor) -> EvalResult<Value> {
        if !cur.eat_ws() {
            return Err(ErrorKind::SyntaxError.into());
        }
        match cur.consume_any(b"+-") {
            None => self.eval_postfix(cur),
            Some(b'-') => Ok(self.eval_unary(cur)?.wrapping_neg()),
            Some(_) => self.eval_unary(cur),
        }
    }

    /// postfix --> primary ( "(" arguments? ")" )?
    ///
    /// This rule settles deferred identifiers. A pending name followed by
    /// `(` must be a function; a pending name without `(` is either a
    /// function name misused as a value (syntax error) or unknown; a
    /// resolved value followed by `(` is a value misused as a callable.
    fn eval_postfix(&self, cur: &mut Cursor) -> EvalResult<Value> {
        let operand = self.eval_primary(cur)?;
        // Whitespace may separate a callee from its argument list; end of
        // input here is fine for an already-resolved value.
        cur.eat_ws();
        if cur.consume_ch(b'(') {
            match operand {
                Operand::Pending(name) => self.eval_call(cur, &name),
                Operand::Value(_) => Err(ErrorKind::SyntaxError.into()),
            }
        } else {
            match operand {
                Operand::Value(v) => Ok(v),
                Operand::Pending(name) => {
                    if self.symbols.func(&name).is_some() {
                        Err(ErrorKind::SyntaxError.into())
                    } else {
                        Err(ErrorKind::UnknownIdentifier.into())
                    }
                }
            }
        }
    }

    /// arguments --> addsub ( "," addsub )*
    ///
    /// Called with the opening paren already consumed. Checking for `)`
    /// before the first argument distinguishes "zero arguments supplied"
    /// from "one empty argument".
    fn eval_call(&self, cur: &mut Cursor, name: &str) -> EvalResult<Value> {
        let func = match self.symbols.func(name) {
            Some(func) => func,
            None => return Err(ErrorKind::UnknownIdentifier.into()),
        };

        let mut args: Vec<Value> = Vec::new();
        if !cur.eat_ws() {
            return Err(ErrorKind::SyntaxError.into());
        }
        if !cur.consume_ch(b')') {
            loop {
                args.push(self.eval_addsub(cur)?);
                if !cur.eat_ws() {
                    return Err(ErrorKind::SyntaxError.into());
                }
                if cur.consume_ch(b',') {
                    continue;
                }
                if cur.consume_ch(b')') {
                    break;
                }
                return Err(ErrorKind::SyntaxError.into());
            }
        }

        if args.len() != func.arity() {
            return Err(ErrorKind::ArgNumMismatch.into());
        }
        Ok(func.call(&args))
    }

    /// primary --> "(" addsub ")" | integer | identifier
    ///
    /// An identifier found in the variable table resolves immediately and
    /// can no longer become a function call. An unresolved identifier is
    /// returned as pending for the postfix rule to decide.
    fn eval_primary(&self, cur: &mut Cursor) -> EvalResult<Operand> {
        if !cur.eat_ws() {
            return Err(ErrorKind::SyntaxError.into());
        }
        if cur.consume_ch(b'(') {
            let res = self.eval_addsub(cur)?;
            if !cur.eat_ws() || !cur.consume_ch(b')') {
                return Err(ErrorKind::SyntaxError.into());
            }
            return Ok(Operand::Value(res));
        }
        match cur.peek() {
            Some(ch) if is_digit(ch) => parse_int(cur).map(Operand::Value),
            Some(ch) if is_alpha(ch) => {
                let name = scan_identifier(cur);
                match self.symbols.var(&name) {
                    Some(v) => Ok(Operand::Value(v)),
                    None => Ok(Operand::Pending(name)),
                }
            }
            _ => Err(ErrorKind::SyntaxError.into()),
        }
    }
}

/// Parses an integer literal at the cursor. The caller guarantees the
/// next character is a digit, so a bare `0` is decimal zero rather than
/// an empty hex or binary literal.
fn parse_int(cur: &mut Cursor) -> EvalResult<Value> {
    let base: Value = if cur.consume_str("0x") || cur.consume_str("0X") {
        16
    } else if cur.consume_str("0b") || cur.consume_str("0B") {
        2
    } else {
        10
    };

    let mut val: Value = 0;
    let mut ndigits = 0usize;
    while let Some(ch) = cur.peek() {
        let digit = match digit_in_base(ch, base) {
            Some(d) => d,
            None => break,
        };
        val = match val.checked_mul(base).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return Err(ErrorKind::InvalidLiteral.into()),
        };
        ndigits += 1;
        cur.bump();
    }

    if ndigits == 0 {
        return Err(ErrorKind::InvalidLiteral.into());
    }
    // A literal running into further letters or digits (`0a`, `0x8FG`,
    // `0b2`) is malformed, not two adjacent tokens.
    if cur.peek().is_some_and(is_alnum) {
        return Err(ErrorKind::InvalidLiteral.into());
    }
    Ok(val)
}

/// Value of `ch` as a digit in `base`, if it is one.
fn digit_in_base(ch: u8, base: Value) -> Option<Value> {
    let d = match ch {
        b'0'..=b'9' => Value::from(ch - b'0'),
        b'a'..=b'f' => Value::from(ch - b'a' + 10),
        b'A'..=b'F' => Value::from(ch - b'A' + 10),
        _ => return None,
    };
    if d < base {
        Some(d)
    } else {
        None
    }
}

/// Scans `alpha alnum*` at the cursor. The caller guarantees the first
/// character is a letter.
fn scan_identifier(cur: &mut Cursor) -> String {
    let mut name = String::new();
    while let Some(ch) = cur.peek() {
        if !is_alnum(ch) {
            break;
        }
        name.push(ch as char);
        cur.bump();
    }
    name
}
