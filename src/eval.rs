// ABOUTME: Evaluator executing expression trees against an environment and a graphics sink

use crate::env::Environment;
use crate::error::{SemanticError, ARITY_AT_LEAST_ONE, ARITY_THREE, ARITY_TWO};
use crate::reader;
use crate::tokenize::tokenize;
use crate::value::{Atom, Expression};

/// Names recognised as special forms and therefore rejected by `define`.
const RESERVED_NAMES: [&str; 3] = ["if", "define", "begin"];

/// Receiver for the graphic atoms emitted by `draw`.
///
/// The interpreter feeds an ordinary `Vec<Atom>`; tests and host
/// renderers can inject their own sink.
pub trait GraphicsSink {
    fn emit(&mut self, graphic: Atom);
}

impl GraphicsSink for Vec<Atom> {
    fn emit(&mut self, graphic: Atom) {
        self.push(graphic);
    }
}

/// Evaluate one expression.
///
/// Arguments are evaluated strictly left to right; special forms
/// (`define`, `begin`, `if`, `draw`) are dispatched on the syntactic head
/// and never looked up through the environment.
pub fn eval(
    expr: &Expression,
    env: &mut Environment,
    sink: &mut dyn GraphicsSink,
) -> Result<Expression, SemanticError> {
    match &expr.head {
        // Self-evaluating leaves
        Atom::Bool(_) | Atom::Number(_) => Ok(expr.clone()),

        // Graphic literals are self-evaluating as well
        Atom::Point(_) | Atom::Line(_) | Atom::Arc(_) => Ok(expr.clone()),

        // Symbol lookup; a bound procedure is invoked with no arguments
        Atom::Symbol(name) => {
            if env.is_proc(name) {
                let proc = env.get_proc(name)?;
                proc(&[])
            } else if env.is_expr(name) {
                env.get_expr(name)
            } else {
                Err(SemanticError::UnknownSymbol(name.clone()))
            }
        }

        Atom::List => eval_list(expr, env, sink),

        Atom::None => Err(SemanticError::EmptyAst),
    }
}

fn eval_list(
    expr: &Expression,
    env: &mut Environment,
    sink: &mut dyn GraphicsSink,
) -> Result<Expression, SemanticError> {
    let tail = &expr.tail;
    if tail.is_empty() {
        return Ok(expr.clone());
    }

    match &tail[0].head {
        Atom::Symbol(name) => match name.as_str() {
            "define" => eval_define(tail, env, sink),
            "begin" => eval_begin(tail, env, sink),
            "if" => eval_if(tail, env, sink),
            "draw" => eval_draw(tail, env, sink),
            _ => {
                if env.is_proc(name) {
                    let proc = env.get_proc(name)?;
                    let mut args = Vec::with_capacity(tail.len() - 1);
                    for arg_expr in &tail[1..] {
                        args.push(eval(arg_expr, env, sink)?.head);
                    }
                    proc(&args)
                } else if env.is_expr(name) {
                    env.get_expr(name)
                } else {
                    Err(SemanticError::UnknownSymbol(name.clone()))
                }
            }
        },

        // A literal head evaluates to itself, e.g. (42) is 42
        Atom::Bool(_) | Atom::Number(_) => Ok(tail[0].clone()),

        other => Err(SemanticError::runtime_error(
            "eval",
            format!("cannot apply a {} head", other.type_name()),
        )),
    }
}

/// `(define name body)` - evaluate the body and bind the result.
///
/// The body is evaluated before the name is checked, so side effects of
/// the body happen even when the binding itself is rejected.
fn eval_define(
    tail: &[Expression],
    env: &mut Environment,
    sink: &mut dyn GraphicsSink,
) -> Result<Expression, SemanticError> {
    if tail.len() != 3 {
        return Err(SemanticError::arity_error("define", ARITY_TWO, tail.len() - 1));
    }

    let name = match &tail[1].head {
        Atom::Symbol(s) => s.clone(),
        other => return Err(SemanticError::type_error("define", "Symbol", other, 1)),
    };

    let value = eval(&tail[2], env, sink)?;

    if RESERVED_NAMES.contains(&name.as_str()) {
        return Err(SemanticError::ReservedName(name));
    }
    env.add_expr(&name, value.clone())?;
    Ok(value)
}

/// `(begin e1 e2 ...)` - evaluate in order, returning the last result;
/// an empty body evaluates to the `None` sentinel.
fn eval_begin(
    tail: &[Expression],
    env: &mut Environment,
    sink: &mut dyn GraphicsSink,
) -> Result<Expression, SemanticError> {
    let mut result = Expression::none();
    for item in &tail[1..] {
        result = eval(item, env, sink)?;
    }
    Ok(result)
}

/// `(if condition then else)` - the condition must be Boolean; exactly
/// one branch is evaluated.
fn eval_if(
    tail: &[Expression],
    env: &mut Environment,
    sink: &mut dyn GraphicsSink,
) -> Result<Expression, SemanticError> {
    if tail.len() != 4 {
        return Err(SemanticError::arity_error("if", ARITY_THREE, tail.len() - 1));
    }

    let condition = eval(&tail[1], env, sink)?;
    match condition.head {
        Atom::Bool(true) => eval(&tail[2], env, sink),
        Atom::Bool(false) => eval(&tail[3], env, sink),
        other => Err(SemanticError::type_error("if", "Boolean", &other, 1)),
    }
}

/// `(draw g1 g2 ...)` - each argument must evaluate to a graphic atom,
/// which is appended to the sink in source order. Evaluates to `None`.
fn eval_draw(
    tail: &[Expression],
    env: &mut Environment,
    sink: &mut dyn GraphicsSink,
) -> Result<Expression, SemanticError> {
    if tail.len() < 2 {
        return Err(SemanticError::arity_error("draw", ARITY_AT_LEAST_ONE, 0));
    }

    for (position, arg_expr) in tail[1..].iter().enumerate() {
        let graphic = eval(arg_expr, env, sink)?.head;
        if graphic.is_graphic() {
            sink.emit(graphic);
        } else {
            return Err(SemanticError::type_error(
                "draw",
                "Point, Line, or Arc",
                &graphic,
                position + 1,
            ));
        }
    }
    Ok(Expression::none())
}

/// The stateful interpreter facade: one environment and one graphics log
/// per session.
///
/// `parse` builds the internal AST; `eval` walks it, updating the
/// environment and appending to the graphics log. State persists across
/// programs until `reset`.
#[derive(Debug)]
pub struct Interpreter {
    env: Environment,
    ast: Expression,
    graphics: Vec<Atom>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            ast: Expression::none(),
            graphics: Vec::new(),
        }
    }

    /// Tokenize and read one program into the internal AST.
    ///
    /// On failure the AST is reset to the `None` sentinel and the parse
    /// error is returned; the environment and graphics log are untouched.
    pub fn parse(&mut self, input: &str) -> Result<(), SemanticError> {
        let tokens = tokenize(input);
        match reader::read(&tokens) {
            Ok(ast) => {
                self.ast = ast;
                Ok(())
            }
            Err(e) => {
                self.ast = Expression::none();
                Err(e)
            }
        }
    }

    /// Evaluate the previously parsed AST.
    pub fn eval(&mut self) -> Result<Expression, SemanticError> {
        if matches!(self.ast.head, Atom::None) {
            return Err(SemanticError::EmptyAst);
        }
        eval(&self.ast, &mut self.env, &mut self.graphics)
    }

    /// Parse and evaluate one program.
    pub fn run(&mut self, input: &str) -> Result<Expression, SemanticError> {
        self.parse(input)?;
        self.eval()
    }

    /// The graphics log: every graphic drawn so far, in source order.
    pub fn graphics(&self) -> &[Atom] {
        &self.graphics
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Drop all user bindings and graphics, returning to the initial
    /// environment.
    pub fn reset(&mut self) {
        self.env.init();
        self.ast = Expression::none();
        self.graphics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(interpreter: &mut Interpreter, input: &str) -> Expression {
        interpreter
            .run(input)
            .unwrap_or_else(|e| panic!("{} failed: {}", input, e))
    }

    #[test]
    fn test_literal_heads() {
        let mut interp = Interpreter::new();
        assert_eq!(run(&mut interp, "(42)"), Expression::number(42.0));
        assert_eq!(run(&mut interp, "(True)"), Expression::boolean(true));
    }

    #[test]
    fn test_procedure_application() {
        let mut interp = Interpreter::new();
        assert_eq!(run(&mut interp, "(+ 1 2)"), Expression::number(3.0));
        assert_eq!(run(&mut interp, "(* 2 (+ 1 2))"), Expression::number(6.0));
        assert_eq!(run(&mut interp, "(- (+ 1 2))"), Expression::number(-3.0));
    }

    #[test]
    fn test_define_binds_and_returns_value() {
        let mut interp = Interpreter::new();
        assert_eq!(run(&mut interp, "(define x 5)"), Expression::number(5.0));
        assert!(interp.env().is_expr("x"));
        assert_eq!(run(&mut interp, "(+ x 10)"), Expression::number(15.0));
    }

    #[test]
    fn test_define_rejects_known_symbols() {
        let mut interp = Interpreter::new();
        run(&mut interp, "(define x 1)");
        assert_eq!(
            interp.run("(define x 2)"),
            Err(SemanticError::Redefinition("x".to_string()))
        );
        assert_eq!(run(&mut interp, "(x)"), Expression::number(1.0));
    }

    #[test]
    fn test_define_rejects_builtins_and_pi() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.run("(define pi 3)"),
            Err(SemanticError::Redefinition("pi".to_string()))
        );
        assert!(interp.run("(define + 1)").is_err());

        // pi still holds atan2(0, -1)
        let pi = run(&mut interp, "(pi)");
        assert_eq!(pi, Expression::number(std::f64::consts::PI));
    }

    #[test]
    fn test_define_rejects_reserved_names() {
        let mut interp = Interpreter::new();
        for name in ["if", "define", "begin"] {
            assert_eq!(
                interp.run(&format!("(define {} 1)", name)),
                Err(SemanticError::ReservedName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_define_arity() {
        let mut interp = Interpreter::new();
        assert!(matches!(
            interp.run("(define x)"),
            Err(SemanticError::Arity { .. })
        ));
        assert!(matches!(
            interp.run("(define x 1 2)"),
            Err(SemanticError::Arity { .. })
        ));
        assert!(matches!(
            interp.run("(define 5 1)"),
            Err(SemanticError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_begin_returns_last_result() {
        let mut interp = Interpreter::new();
        assert_eq!(
            run(&mut interp, "(begin (define x 5) (+ x 10))"),
            Expression::number(15.0)
        );
        assert_eq!(interp.env().get_expr("x").unwrap(), Expression::number(5.0));
    }

    #[test]
    fn test_begin_with_no_body_is_none() {
        let mut interp = Interpreter::new();
        assert_eq!(run(&mut interp, "(begin)"), Expression::none());
    }

    #[test]
    fn test_if_selects_branch() {
        let mut interp = Interpreter::new();
        assert_eq!(run(&mut interp, "(if True 10 20)"), Expression::number(10.0));
        assert_eq!(run(&mut interp, "(if False 10 20)"), Expression::number(20.0));
    }

    #[test]
    fn test_if_condition_must_be_boolean() {
        let mut interp = Interpreter::new();
        assert!(matches!(
            interp.run("(if 3 10 20)"),
            Err(SemanticError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_if_does_not_evaluate_untaken_branch() {
        let mut interp = Interpreter::new();
        // The untaken branch contains a define; the binding must not appear
        run(&mut interp, "(if True 1 (define hidden 2))");
        assert!(!interp.env().is_known("hidden"));

        run(&mut interp, "(if False (define hidden 2) 1)");
        assert!(!interp.env().is_known("hidden"));
    }

    #[test]
    fn test_if_arity() {
        let mut interp = Interpreter::new();
        assert!(matches!(
            interp.run("(if True 1)"),
            Err(SemanticError::Arity { .. })
        ));
        assert!(matches!(
            interp.run("(if True 1 2 3)"),
            Err(SemanticError::Arity { .. })
        ));
    }

    #[test]
    fn test_draw_appends_graphics_in_order() {
        let mut interp = Interpreter::new();
        run(
            &mut interp,
            "(begin (draw (point 0 0)) (draw (line (point 10 0) (point 0 10)) (arc (point 0 0) (point 100 0) pi)))",
        );

        let graphics = interp.graphics();
        assert_eq!(graphics.len(), 3);
        assert!(matches!(graphics[0], Atom::Point(_)));
        assert!(matches!(graphics[1], Atom::Line(_)));
        assert!(matches!(graphics[2], Atom::Arc(_)));
    }

    #[test]
    fn test_draw_returns_none() {
        let mut interp = Interpreter::new();
        assert_eq!(run(&mut interp, "(draw (point 1 2))"), Expression::none());
    }

    #[test]
    fn test_draw_rejects_non_graphics() {
        let mut interp = Interpreter::new();
        assert!(matches!(
            interp.run("(draw 42)"),
            Err(SemanticError::TypeMismatch { .. })
        ));
        assert!(matches!(
            interp.run("(draw)"),
            Err(SemanticError::Arity { .. })
        ));
    }

    #[test]
    fn test_draw_keeps_graphics_emitted_before_failure() {
        let mut interp = Interpreter::new();
        assert!(interp.run("(draw (point 0 0) 42)").is_err());
        assert_eq!(interp.graphics().len(), 1);
    }

    #[test]
    fn test_unknown_symbol_fails() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.run("(foo)"),
            Err(SemanticError::UnknownSymbol("foo".to_string()))
        );
        assert_eq!(
            interp.run("(+ 1 bar)"),
            Err(SemanticError::UnknownSymbol("bar".to_string()))
        );
    }

    #[test]
    fn test_argument_evaluation_is_left_to_right() {
        let mut interp = Interpreter::new();
        // The define inside the first argument is visible to the second
        assert_eq!(
            run(&mut interp, "(+ (define a 1) a)"),
            Expression::number(2.0)
        );
    }

    #[test]
    fn test_failed_program_keeps_prior_definitions() {
        let mut interp = Interpreter::new();
        assert!(interp.run("(begin (define x 1) (/ 1 0) (define y 2))").is_err());
        assert!(interp.env().is_known("x"));
        assert!(!interp.env().is_known("y"));
    }

    #[test]
    fn test_expression_binding_as_list_head() {
        let mut interp = Interpreter::new();
        run(&mut interp, "(define x 7)");
        assert_eq!(run(&mut interp, "(x)"), Expression::number(7.0));
    }

    #[test]
    fn test_graphic_results_format_through_display() {
        let mut interp = Interpreter::new();
        let point = run(&mut interp, "(point 1 2)");
        assert_eq!(format!("({})", point), "((1,2))");

        let line = run(&mut interp, "(line (point 10 0) (point 0 10))");
        assert_eq!(format!("({})", line), "(((10,0),(0,10)))");
    }

    #[test]
    fn test_eval_without_parse_fails() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.eval(), Err(SemanticError::EmptyAst));
    }

    #[test]
    fn test_parse_failure_resets_ast() {
        let mut interp = Interpreter::new();
        interp.run("(+ 1 2)").unwrap();
        assert!(interp.parse("(+ 1").is_err());
        assert_eq!(interp.eval(), Err(SemanticError::EmptyAst));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut interp = Interpreter::new();
        run(&mut interp, "(begin (define x 1) (draw (point 0 0)))");
        interp.reset();
        assert!(!interp.env().is_known("x"));
        assert!(interp.graphics().is_empty());
    }

    #[test]
    fn test_custom_sink_receives_graphics() {
        struct Counting(usize);
        impl GraphicsSink for Counting {
            fn emit(&mut self, _graphic: Atom) {
                self.0 += 1;
            }
        }

        let mut env = Environment::new();
        let mut sink = Counting(0);
        let tokens = crate::tokenize::tokenize("(draw (point 1 1) (point 2 2))");
        let ast = crate::reader::read(&tokens).unwrap();
        eval(&ast, &mut env, &mut sink).unwrap();
        assert_eq!(sink.0, 2);
    }
}
