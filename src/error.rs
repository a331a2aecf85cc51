// ABOUTME: Error types for parse and evaluation failures in the slisp interpreter

use crate::value::Atom;
use thiserror::Error;

// ===== Arity constant strings (eliminates allocations in error paths) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_THREE: &str = "3";
pub const ARITY_AT_LEAST_ONE: &str = "at least 1";
pub const ARITY_ONE_OR_TWO: &str = "1 or 2";

/// The single error category of the interpreter: a semantic error with a
/// human-readable message. Parse and evaluation conditions are separate
/// variants so callers and tests can distinguish them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticError {
    // ===== Parse errors =====
    #[error("empty program")]
    EmptyProgram,

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unmatched closing parenthesis")]
    UnmatchedParen,

    #[error("empty list")]
    EmptyList,

    #[error("extra tokens after program")]
    TrailingTokens,

    #[error("program must be a parenthesised form")]
    NotAList,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    // ===== Evaluation errors =====
    #[error("no expression to evaluate")]
    EmptyAst,

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("{0} is already defined")]
    Redefinition(String),

    #[error("{0} is a reserved name")]
    ReservedName(String),

    /// Arity error with function name, expected count/range, and actual count
    #[error("{function}: expected {expected} argument(s), got {actual}")]
    Arity {
        function: String,
        expected: &'static str,
        actual: usize,
    },

    /// Type mismatch with function name, expected kind, actual kind, and
    /// 1-based argument position
    #[error("{function}: expected {expected}, got {actual} at argument {position}")]
    TypeMismatch {
        function: String,
        expected: &'static str,
        actual: &'static str,
        position: usize,
    },

    /// Runtime error with function context
    #[error("{function}: {message}")]
    Runtime { function: String, message: String },
}

impl SemanticError {
    /// Create a type mismatch error from the offending atom.
    pub fn type_error(function: &str, expected: &'static str, actual: &Atom, position: usize) -> Self {
        SemanticError::TypeMismatch {
            function: function.to_string(),
            expected,
            actual: actual.type_name(),
            position,
        }
    }

    /// Create an arity error with expected and actual counts.
    pub fn arity_error(function: &str, expected: &'static str, actual: usize) -> Self {
        SemanticError::Arity {
            function: function.to_string(),
            expected,
            actual,
        }
    }

    /// Create a runtime error with function context.
    pub fn runtime_error(function: &str, message: impl Into<String>) -> Self {
        SemanticError::Runtime {
            function: function.to_string(),
            message: message.into(),
        }
    }
}
