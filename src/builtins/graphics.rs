//! Graphic constructors: point, line, arc
//!
//! - `point`: `(point x y)` from two numbers
//! - `line`: `(line a b)` from two points
//! - `arc`: `(arc center start span)` from two points and a number
//!
//! These build graphic atoms; emitting them into the graphics log is the
//! job of the `draw` special form.

use super::{number_arg, point_arg};
use crate::env::Environment;
use crate::error::{SemanticError, ARITY_THREE, ARITY_TWO};
use crate::value::{Arc, Atom, Expression, Line, Point};

/// Construct a point from two numbers.
pub fn builtin_point(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 2 {
        return Err(SemanticError::arity_error("point", ARITY_TWO, args.len()));
    }

    let x = number_arg("point", args, 0)?;
    let y = number_arg("point", args, 1)?;
    Ok(Expression::atom(Atom::Point(Point { x, y })))
}

/// Construct a directed segment from two points.
pub fn builtin_line(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 2 {
        return Err(SemanticError::arity_error("line", ARITY_TWO, args.len()));
    }

    let first = point_arg("line", args, 0)?;
    let second = point_arg("line", args, 1)?;
    Ok(Expression::atom(Atom::Line(Line { first, second })))
}

/// Construct an arc from a center point, a start point, and a signed
/// angular span in radians.
pub fn builtin_arc(args: &[Atom]) -> Result<Expression, SemanticError> {
    if args.len() != 3 {
        return Err(SemanticError::arity_error("arc", ARITY_THREE, args.len()));
    }

    let center = point_arg("arc", args, 0)?;
    let start = point_arg("arc", args, 1)?;
    let span = number_arg("arc", args, 2)?;
    Ok(Expression::atom(Atom::Arc(Arc { center, start, span })))
}

/// Register all graphic constructors in the environment.
pub fn register(env: &mut Environment) {
    env.register_proc("point", builtin_point);
    env.register_proc("line", builtin_line);
    env.register_proc("arc", builtin_arc);
}
