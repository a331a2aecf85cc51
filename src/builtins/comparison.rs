//! Comparison operations: <, >, <=, >=, =
//!
//! Relational operators over exactly two numbers, returning a Boolean.
//! Equality uses the interpreter-wide machine-epsilon tolerance.

use super::number_arg;
use crate::env::Environment;
use crate::error::{SemanticError, ARITY_TWO};
use crate::value::{approx_eq, Atom, Expression};

fn two_numbers(function: &str, args: &[Atom]) -> Result<(f64, f64), SemanticError> {
    if args.len() != 2 {
        return Err(SemanticError::arity_error(function, ARITY_TWO, args.len()));
    }
    Ok((number_arg(function, args, 0)?, number_arg(function, args, 1)?))
}

pub fn builtin_lt(args: &[Atom]) -> Result<Expression, SemanticError> {
    let (a, b) = two_numbers("<", args)?;
    Ok(Expression::boolean(a < b))
}

pub fn builtin_gt(args: &[Atom]) -> Result<Expression, SemanticError> {
    let (a, b) = two_numbers(">", args)?;
    Ok(Expression::boolean(a > b))
}

pub fn builtin_le(args: &[Atom]) -> Result<Expression, SemanticError> {
    let (a, b) = two_numbers("<=", args)?;
    Ok(Expression::boolean(a <= b))
}

pub fn builtin_ge(args: &[Atom]) -> Result<Expression, SemanticError> {
    let (a, b) = two_numbers(">=", args)?;
    Ok(Expression::boolean(a >= b))
}

pub fn builtin_eq(args: &[Atom]) -> Result<Expression, SemanticError> {
    let (a, b) = two_numbers("=", args)?;
    Ok(Expression::boolean(approx_eq(a, b)))
}

/// Register all comparison builtins in the environment.
pub fn register(env: &mut Environment) {
    env.register_proc("<", builtin_lt);
    env.register_proc(">", builtin_gt);
    env.register_proc("<=", builtin_le);
    env.register_proc(">=", builtin_ge);
    env.register_proc("=", builtin_eq);
}
