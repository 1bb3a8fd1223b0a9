//! Recursive-descent parser.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/" | "//" | "%") unary)*
//! unary   := ("+" | "-") unary | power
//! power   := primary ("**" unary)?
//! primary := NUMBER | NAME | NAME "(" [expr ("," expr)*] ")" | "(" expr ")"
//! ```
//!
//! `power` takes a `unary` on its right, so `2**-1` parses and `**` is
//! right-associative while `-x**2` still means `-(x**2)`.

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::lexer::{tokenize, Token, TokenKind};
use super::EvalError;

/// Limit on tree depth, counting both nesting and operator chains. Deeper
/// input is rejected instead of exhausting the stack.
const MAX_DEPTH: usize = 200;

/// Parse an expression string into a tree.
pub fn parse(input: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(input)?;
    if matches!(tokens[0].kind, TokenKind::End) {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens,
        current: 0,
        depth: 0,
    };
    let expr = parser.expr()?;

    let trailing = parser.peek();
    if trailing.kind != TokenKind::End {
        return Err(parser.unexpected(trailing));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // The token list always ends with End, and advance never moves past it.
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if token.kind != TokenKind::End {
            self.current += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn enter(&mut self, offset: usize) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::syntax("expression nests too deeply", offset));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.term()?;
        // Each operator deepens the left-leaning tree by one level.
        let mut chained = 0;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let token = self.advance();
            self.enter(token.offset)?;
            chained += 1;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth -= chained;
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.unary()?;
        let mut chained = 0;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::SlashSlash => BinaryOp::FloorDiv,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            let token = self.advance();
            self.enter(token.offset)?;
            chained += 1;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
        self.depth -= chained;
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        let op = match self.peek().kind {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.power(),
        };
        let token = self.advance();

        self.enter(token.offset)?;
        let operand = self.unary()?;
        self.leave();

        Ok(Expr::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.primary()?;
        if !matches!(self.peek().kind, TokenKind::Power) {
            return Ok(base);
        }
        let token = self.advance();

        self.enter(token.offset)?;
        let exponent = self.unary()?;
        self.leave();

        Ok(binary(BinaryOp::Pow, base, exponent))
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        let token = self.advance();
        let expr = match token.kind {
            TokenKind::Number(value) => Expr::Number(value),
            TokenKind::Ident(name) => {
                if self.eat(&TokenKind::LParen) {
                    let args = self.arguments(token.offset)?;
                    Expr::Call {
                        name,
                        args,
                        offset: token.offset,
                    }
                } else {
                    Expr::Name {
                        name,
                        offset: token.offset,
                    }
                }
            },
            TokenKind::LParen => {
                self.enter(token.offset)?;
                let inner = self.expr()?;
                self.leave();
                if !self.eat(&TokenKind::RParen) {
                    return Err(self.expected("')'"));
                }
                inner
            },
            _ => return Err(self.unexpected(&token)),
        };

        // Postfix forms are recognised only to reject them with a clear message.
        let next = self.peek();
        match next.kind {
            TokenKind::Dot => Err(EvalError::syntax(
                "attribute access is not supported",
                next.offset,
            )),
            TokenKind::LBracket => Err(EvalError::syntax(
                "indexing is not supported",
                next.offset,
            )),
            TokenKind::LParen => Err(EvalError::syntax(
                "only library functions can be called",
                next.offset,
            )),
            _ => Ok(expr),
        }
    }

    /// Parse call arguments after the opening parenthesis.
    fn arguments(&mut self, offset: usize) -> Result<Vec<Expr>, EvalError> {
        self.enter(offset)?;
        let mut args = Vec::new();
        if !self.eat(&TokenKind::RParen) {
            loop {
                args.push(self.expr()?);
                if self.eat(&TokenKind::RParen) {
                    break;
                }
                if !self.eat(&TokenKind::Comma) {
                    return Err(self.expected("',' or ')'"));
                }
            }
        }
        self.leave();
        Ok(args)
    }

    fn expected(&self, what: &str) -> EvalError {
        let token = self.peek();
        let found = describe(&token.kind);
        EvalError::syntax(format!("expected {} but found {}", what, found), token.offset)
    }

    fn unexpected(&self, token: &Token) -> EvalError {
        EvalError::syntax(format!("unexpected {}", describe(&token.kind)), token.offset)
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Number(n) => format!("number {}", n),
        TokenKind::Ident(name) => format!("'{}'", name),
        TokenKind::Plus => "'+'".to_string(),
        TokenKind::Minus => "'-'".to_string(),
        TokenKind::Star => "'*'".to_string(),
        TokenKind::Slash => "'/'".to_string(),
        TokenKind::SlashSlash => "'//'".to_string(),
        TokenKind::Percent => "'%'".to_string(),
        TokenKind::Power => "'**'".to_string(),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
        TokenKind::Comma => "','".to_string(),
        TokenKind::Dot => "'.'".to_string(),
        TokenKind::LBracket => "'['".to_string(),
        TokenKind::RBracket => "']'".to_string(),
        TokenKind::End => "end of input".to_string(),
    }
}
