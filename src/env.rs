// ABOUTME: Environment mapping symbols to expression bindings and built-in procedures

use crate::builtins;
use crate::error::SemanticError;
use crate::value::{Atom, Expression};
use std::collections::BTreeMap;

/// A built-in procedure: a pure function from already-evaluated atoms to
/// an expression.
pub type Procedure = fn(&[Atom]) -> Result<Expression, SemanticError>;

#[derive(Debug, Clone)]
enum EnvEntry {
    Proc(Procedure),
    Expr(Expression),
}

/// An ordered mapping from symbol name to either a built-in procedure or
/// a bound expression.
///
/// A symbol has at most one entry, of one kind. Bindings are one-shot:
/// once a name is present (built-ins included), `add_expr` for that name
/// fails and the existing entry is left untouched.
#[derive(Debug, Clone)]
pub struct Environment {
    map: BTreeMap<String, EnvEntry>,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

impl Environment {
    /// A fresh environment holding the standard procedure table and the
    /// single pre-bound expression `pi`.
    pub fn new() -> Self {
        let mut env = Environment {
            map: BTreeMap::new(),
        };
        env.init();
        env
    }

    /// Clear the map and reinstall the standard table; pre-bind `pi`.
    pub fn init(&mut self) {
        self.map.clear();
        builtins::register_builtins(self);

        let pi = f64::atan2(0.0, -1.0);
        self.map
            .insert("pi".to_string(), EnvEntry::Expr(Expression::number(pi)));
    }

    pub fn is_known(&self, sym: &str) -> bool {
        self.map.contains_key(sym)
    }

    pub fn is_proc(&self, sym: &str) -> bool {
        matches!(self.map.get(sym), Some(EnvEntry::Proc(_)))
    }

    pub fn is_expr(&self, sym: &str) -> bool {
        matches!(self.map.get(sym), Some(EnvEntry::Expr(_)))
    }

    /// Retrieve a built-in procedure or fail.
    pub fn get_proc(&self, sym: &str) -> Result<Procedure, SemanticError> {
        match self.map.get(sym) {
            Some(EnvEntry::Proc(proc)) => Ok(*proc),
            _ => Err(SemanticError::UnknownSymbol(sym.to_string())),
        }
    }

    /// Retrieve a bound expression or fail.
    pub fn get_expr(&self, sym: &str) -> Result<Expression, SemanticError> {
        match self.map.get(sym) {
            Some(EnvEntry::Expr(expr)) => Ok(expr.clone()),
            _ => Err(SemanticError::UnknownSymbol(sym.to_string())),
        }
    }

    /// Bind `sym` to an expression. Fails if `sym` is already present as
    /// either kind of entry.
    pub fn add_expr(&mut self, sym: &str, expr: Expression) -> Result<(), SemanticError> {
        if self.map.contains_key(sym) {
            return Err(SemanticError::Redefinition(sym.to_string()));
        }
        self.map.insert(sym.to_string(), EnvEntry::Expr(expr));
        Ok(())
    }

    /// Install a built-in procedure. Used by the registration code only;
    /// user programs cannot reach this.
    pub(crate) fn register_proc(&mut self, sym: &str, proc: Procedure) {
        self.map.insert(sym.to_string(), EnvEntry::Proc(proc));
    }
}
