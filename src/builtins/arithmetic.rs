//! Arithmetic operations: +, -, *, /
//!
//! - `+`: Sum of one or more numbers
//! - `-`: Negate a single number, or subtract the second from the first
//! - `*`: Product of one or more numbers
//! - `/`: Quotient of exactly two numbers; division by zero fails

use super::number_arg;
use crate::env::Environment;
use crate::error::{SemanticError, ARITY_AT_LEAST_ONE, ARITY_ONE_OR_TWO, ARITY_TWO};
use crate::value::{Atom, Expression};

/// Returns the sum of all arguments. Requires at least one number.
pub fn builtin_add(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.is_empty() {
        return Err(SemanticError::arity_error("+", ARITY_AT_LEAST_ONE, 0));
    }

    let mut sum = 0.0;
    for index in 0..args.len() {
        sum += number_arg("+", args, index)?;
    }
    Ok(Expression::number(sum))
}

/// Negates a single number, or subtracts the second argument from the
/// first.
pub fn builtin_sub(args: &[Atom]) -> Result<Expression, SemanticError> {
    match args.len() {
        1 => Ok(Expression::number(-number_arg("-", args, 0)?)),
        2 => {
            let a = number_arg("-", args, 0)?;
            let b = number_arg("-", args, 1)?;
            Ok(Expression::number(a - b))
        }
        n => Err(SemanticError::arity_error("-", ARITY_ONE_OR_TWO, n)),
    }
}

/// Returns the product of all arguments. Requires at least one number.
pub fn builtin_mul(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.is_empty() {
        return Err(SemanticError::arity_error("*", ARITY_AT_LEAST_ONE, 0));
    }

    let mut product = 1.0;
    for index in 0..args.len() {
        product *= number_arg("*", args, index)?;
    }
    Ok(Expression::number(product))
}

/// Divides the first argument by the second. Exactly two numbers; the
/// divisor must be non-zero.
pub fn builtin_div(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 2 {
        return Err(SemanticError::arity_error("/", ARITY_TWO, args.len()));
    }

    let a = number_arg("/", args, 0)?;
    let b = number_arg("/", args, 1)?;
    if b == 0.0 {
        return Err(SemanticError::runtime_error("/", "division by zero"));
    }
    Ok(Expression::number(a / b))
}

/// Register all arithmetic builtins in the environment.
pub fn register(env: &mut Environment) {
    env.register_proc("+", builtin_add);
    env.register_proc("-", builtin_sub);
    env.register_proc("*", builtin_mul);
    env.register_proc("/", builtin_div);
}
