//! Logic operations: and, or, not
//!
//! Boolean operators over one or more already-evaluated Booleans.
//! `and` and `or` short-circuit on the first decisive value.

use super::bool_arg;
use crate::env::Environment;
use crate::error::{SemanticError, ARITY_AT_LEAST_ONE, ARITY_ONE};
use crate::value::{Atom, Expression};

/// Conjunction of one or more Booleans; false as soon as one is false.
pub fn builtin_and(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.is_empty() {
        return Err(SemanticError::arity_error("and", ARITY_AT_LEAST_ONE, 0));
    }

    for index in 0..args.len() {
        if !bool_arg("and", args, index)? {
            return Ok(Expression::boolean(false));
        }
    }
    Ok(Expression::boolean(true))
}

/// Disjunction of one or more Booleans; true as soon as one is true.
pub fn builtin_or(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.is_empty() {
        return Err(SemanticError::arity_error("or", ARITY_AT_LEAST_ONE, 0));
    }

    for index in 0..args.len() {
        if bool_arg("or", args, index)? {
            return Ok(Expression::boolean(true));
        }
    }
    Ok(Expression::boolean(false))
}

/// Negation of exactly one Boolean.
pub fn builtin_not(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 1 {
        return Err(SemanticError::arity_error("not", ARITY_ONE, args.len()));
    }
    Ok(Expression::boolean(!bool_arg("not", args, 0)?))
}

/// Register all logic builtins in the environment.
pub fn register(env: &mut Environment) {
    env.register_proc("and", builtin_and);
    env.register_proc("or", builtin_or);
    env.register_proc("not", builtin_not);
}
