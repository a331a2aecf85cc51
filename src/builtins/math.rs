//! Math operations: log10, pow, sin, cos, arctan
//!
//! - `log10`: base-10 logarithm of a single positive number
//! - `pow`: base raised to exponent
//! - `sin`, `cos`: trigonometry on radians
//! - `arctan`: two-argument arctangent, `(arctan y x)`

use super::number_arg;
use crate::env::Environment;
use crate::error::{SemanticError, ARITY_ONE, ARITY_TWO};
use crate::value::{Atom, Expression};

/// Base-10 logarithm. The argument must be strictly positive.
pub fn builtin_log10(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 1 {
        return Err(SemanticError::arity_error("log10", ARITY_ONE, args.len()));
    }

    let n = number_arg("log10", args, 0)?;
    if n <= 0.0 {
        return Err(SemanticError::runtime_error(
            "log10",
            "argument must be greater than zero",
        ));
    }
    Ok(Expression::number(n.log10()))
}

/// Raises the first argument to the power of the second.
pub fn builtin_pow(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 2 {
        return Err(SemanticError::arity_error("pow", ARITY_TWO, args.len()));
    }

    let base = number_arg("pow", args, 0)?;
    let exponent = number_arg("pow", args, 1)?;
    Ok(Expression::number(base.powf(exponent)))
}

/// Sine of an angle in radians.
pub fn builtin_sin(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 1 {
        return Err(SemanticError::arity_error("sin", ARITY_ONE, args.len()));
    }
    Ok(Expression::number(number_arg("sin", args, 0)?.sin()))
}

/// Cosine of an angle in radians.
pub fn builtin_cos(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 1 {
        return Err(SemanticError::arity_error("cos", ARITY_ONE, args.len()));
    }
    Ok(Expression::number(number_arg("cos", args, 0)?.cos()))
}

/// Two-argument arctangent: `(arctan y x)` is the angle of the point
/// `(x, y)` in radians.
pub fn builtin_arctan(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 2 {
        return Err(SemanticError::arity_error("arctan", ARITY_TWO, args.len()));
    }

    let y = number_arg("arctan", args, 0)?;
    let x = number_arg("arctan", args, 1)?;
    Ok(Expression::number(y.atan2(x)))
}

/// Register all math builtins in the environment.
pub fn register(env: &mut Environment) {
    env.register_proc("log10", builtin_log10);
    env.register_proc("pow", builtin_pow);
    env.register_proc("sin", builtin_sin);
    env.register_proc("cos", builtin_cos);
    env.register_proc("arctan", builtin_arctan);
}
