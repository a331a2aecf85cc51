// ABOUTME: Reader lifting token sequences into expression trees

use crate::error::SemanticError;
use crate::value::{token_to_atom, Atom, Expression};

/// Read a whole program from a token sequence.
///
/// The program must be exactly one parenthesised form: a bare atom at the
/// top level, leftover tokens, or an empty token sequence are all errors.
pub fn read(tokens: &[&str]) -> Result<Expression, SemanticError> {
    if tokens.is_empty() {
        return Err(SemanticError::EmptyProgram);
    }

    let mut pos = 0;
    let expr = read_from_tokens(tokens, &mut pos)?;

    if pos < tokens.len() {
        return Err(SemanticError::TrailingTokens);
    }
    if !matches!(expr.head, Atom::List) {
        return Err(SemanticError::NotAList);
    }

    Ok(expr)
}

/// Read one expression starting at `pos`, advancing `pos` past it.
fn read_from_tokens(tokens: &[&str], pos: &mut usize) -> Result<Expression, SemanticError> {
    let token = *tokens.get(*pos).ok_or(SemanticError::UnexpectedEof)?;
    *pos += 1;

    match token {
        "(" => {
            let mut tail = Vec::new();
            loop {
                match tokens.get(*pos) {
                    None => return Err(SemanticError::UnexpectedEof),
                    Some(&")") => {
                        *pos += 1;
                        break;
                    }
                    Some(_) => tail.push(read_from_tokens(tokens, pos)?),
                }
            }
            if tail.is_empty() {
                return Err(SemanticError::EmptyList);
            }
            Ok(Expression::list(tail))
        }
        ")" => Err(SemanticError::UnmatchedParen),
        _ => token_to_atom(token)
            .map(Expression::atom)
            .ok_or_else(|| SemanticError::InvalidToken(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn read_str(input: &str) -> Result<Expression, SemanticError> {
        read(&tokenize(input))
    }

    #[test]
    fn test_read_simple_list() {
        let expr = read_str("(+ 1 2)").unwrap();
        assert_eq!(
            expr,
            Expression::list(vec![
                Expression::symbol("+"),
                Expression::number(1.0),
                Expression::number(2.0),
            ])
        );
    }

    #[test]
    fn test_read_nested_list() {
        let expr = read_str("(begin (define x 1) (+ x 2))").unwrap();
        assert_eq!(expr.tail.len(), 3);
        assert_eq!(expr.tail[0], Expression::symbol("begin"));
        assert!(matches!(expr.tail[1].head, Atom::List));
        assert_eq!(expr.tail[1].tail.len(), 3);
        assert!(matches!(expr.tail[2].head, Atom::List));
    }

    #[test]
    fn test_read_literals() {
        let expr = read_str("(list True False 2.5 1e-3 foo)").unwrap();
        assert_eq!(expr.tail[1], Expression::boolean(true));
        assert_eq!(expr.tail[2], Expression::boolean(false));
        assert_eq!(expr.tail[3], Expression::number(2.5));
        assert_eq!(expr.tail[4], Expression::number(0.001));
        assert_eq!(expr.tail[5], Expression::symbol("foo"));
    }

    #[test]
    fn test_read_empty_program() {
        assert_eq!(read_str(""), Err(SemanticError::EmptyProgram));
        assert_eq!(read_str("; only a comment"), Err(SemanticError::EmptyProgram));
    }

    #[test]
    fn test_read_empty_list_is_error() {
        assert_eq!(read_str("()"), Err(SemanticError::EmptyList));
        assert_eq!(read_str("(  )"), Err(SemanticError::EmptyList));
    }

    #[test]
    fn test_read_unbalanced_parens() {
        assert_eq!(read_str("(+ 1 2"), Err(SemanticError::UnexpectedEof));
        assert_eq!(read_str(")"), Err(SemanticError::UnmatchedParen));
        assert_eq!(read_str("(+ 1 2))"), Err(SemanticError::TrailingTokens));
    }

    #[test]
    fn test_read_extra_tokens() {
        assert_eq!(read_str("(+ 1 2) 3"), Err(SemanticError::TrailingTokens));
        assert_eq!(read_str("(+ 1 2) (+ 3 4)"), Err(SemanticError::TrailingTokens));
    }

    #[test]
    fn test_read_bare_atom_top_level() {
        assert_eq!(read_str("42"), Err(SemanticError::NotAList));
        assert_eq!(read_str("foo"), Err(SemanticError::NotAList));
    }

    #[test]
    fn test_read_invalid_token() {
        assert_eq!(
            read_str("(+ 1 @bad)"),
            Err(SemanticError::InvalidToken("@bad".to_string()))
        );
    }

    #[test]
    fn test_read_comments_inside_list() {
        let expr = read_str("(+ 1 ; one\n 2) ; done").unwrap();
        assert_eq!(expr.tail.len(), 3);
    }
}
