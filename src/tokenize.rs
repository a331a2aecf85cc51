// ABOUTME: Tokenizer turning raw program text into a sequence of string tokens

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace1},
    combinator::value,
    multi::many0,
    IResult, Parser,
};

/// Parse a line comment: `;` up to (but not including) the newline.
fn line_comment(input: &str) -> IResult<&str, ()> {
    let (input, _) = char(';')(input)?;
    let (input, _) = take_while(|c| c != '\n')(input)?;
    Ok((input, ()))
}

/// Skip whitespace and comments.
fn ws_and_comments(input: &str) -> IResult<&str, ()> {
    many0(alt((value((), multispace1), line_comment)))
        .map(|_| ())
        .parse(input)
}

/// A parenthesis is always its own token.
fn paren(input: &str) -> IResult<&str, &str> {
    alt((tag("("), tag(")"))).parse(input)
}

/// A maximal run of characters that are not whitespace, parentheses, or
/// the comment character.
fn bare_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '(' && c != ')' && c != ';')(input)
}

/// Split program text into tokens.
///
/// Tokenization is total: every input produces a (possibly empty) token
/// sequence. Lexical validity of the individual tokens is the reader's
/// responsibility.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = ws_and_comments(remaining).unwrap_or((remaining, ()));
        remaining = rest;
        if remaining.is_empty() {
            break;
        }

        if let Ok((rest, token)) = paren(remaining) {
            tokens.push(token);
            remaining = rest;
            continue;
        }

        match bare_token(remaining) {
            Ok((rest, token)) => {
                tokens.push(token);
                remaining = rest;
            }
            // Unreachable: any character left here starts a bare token
            Err(_) => break,
        }
    }

    tokens
}
