//! Tokenizer for the expression language.

use super::EvalError;

/// Token kinds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    Percent,
    /// `**` or `^`.
    Power,
    LParen,
    RParen,
    Comma,
    /// Only lexed so the parser can reject attribute access by name.
    Dot,
    LBracket,
    RBracket,
    End,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

/// Split an expression into tokens, terminated by [`TokenKind::End`].
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        let start = pos;

        let kind = match c {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
                continue;
            },
            b'0'..=b'9' => {
                pos = scan_number(bytes, pos);
                TokenKind::Number(parse_number(&input[start..pos], start)?)
            },
            b'.' if bytes.get(pos + 1).is_some_and(u8::is_ascii_digit) => {
                pos = scan_number(bytes, pos);
                TokenKind::Number(parse_number(&input[start..pos], start)?)
            },
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                TokenKind::Ident(input[start..pos].to_string())
            },
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                TokenKind::Power
            },
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos += 2;
                TokenKind::SlashSlash
            },
            _ => {
                let kind = match c {
                    b'+' => TokenKind::Plus,
                    b'-' => TokenKind::Minus,
                    b'*' => TokenKind::Star,
                    b'/' => TokenKind::Slash,
                    b'%' => TokenKind::Percent,
                    b'^' => TokenKind::Power,
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    b',' => TokenKind::Comma,
                    b'.' => TokenKind::Dot,
                    b'[' => TokenKind::LBracket,
                    b']' => TokenKind::RBracket,
                    b'\'' | b'"' => {
                        return Err(EvalError::syntax("string literals are not supported", start))
                    },
                    _ => {
                        let ch = input[start..].chars().next().unwrap_or('?');
                        return Err(EvalError::syntax(
                            format!("unexpected character '{}'", ch),
                            start,
                        ));
                    },
                };
                pos += 1;
                kind
            },
        };

        tokens.push(Token {
            kind,
            offset: start,
        });
    }

    tokens.push(Token {
        kind: TokenKind::End,
        offset: input.len(),
    });
    Ok(tokens)
}

/// Advance over `digits [. digits] [(e|E) [+-] digits]`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        // `2e` or `2ex` leaves the `e` for the next token
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            pos = exp;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}

fn parse_number(text: &str, offset: usize) -> Result<f64, EvalError> {
    text.parse::<f64>()
        .map_err(|_| EvalError::syntax(format!("invalid number '{}'", text), offset))
}
