use std::fmt::Display;

use crate::{
    ast::{primitive::Identifier, Expression},
    error::Result,
    lexer::{Token, TokenKind},
    parser::Carriage,
};

use super::Statement;

/// Chain assignment: every target receives the same value, assigned
/// right-to-left (`a = b = 5` updates `b`, then `a`).
#[derive(Debug, PartialEq, Clone)]
pub struct Assignment {
    pub targets: Vec<Identifier>,
    pub value: Expression,
}

impl Assignment {
    /// Parses the chain that starts with `current`. Targets may be joined by
    /// `=` or, when `allow_comma` is set, by `,`; loop headers disable commas
    /// since they separate the header clauses.
    pub fn parse(carriage: &mut Carriage, current: Token, allow_comma: bool) -> Result<Self> {
        let mut targets = vec![Identifier::from(&current)];

        let separators: &[TokenKind] = if allow_comma {
            &[TokenKind::Assign, TokenKind::Comma]
        } else {
            &[TokenKind::Assign]
        };

        loop {
            let separator = carriage.expect_tokens(separators)?;

            if separator.kind == TokenKind::Comma {
                let target = carriage.expect_tokens(&[TokenKind::Ident])?;
                targets.push(Identifier::from(&target));
                continue;
            }

            if Self::continues_chain(carriage, allow_comma) {
                let target = carriage.next_token()?;
                targets.push(Identifier::from(&target));
                continue;
            }

            let value = Expression::expect_and_parse(carriage)?;
            return Ok(Assignment { targets, value });
        }
    }

    fn continues_chain(carriage: &Carriage, allow_comma: bool) -> bool {
        if !carriage.is_peek_token(TokenKind::Ident) {
            return false;
        }

        match carriage.peek_nth(1).map(|token| token.kind) {
            Some(TokenKind::Assign) => true,
            Some(TokenKind::Comma) => allow_comma,
            _ => false,
        }
    }
}

impl From<Assignment> for Statement {
    fn from(value: Assignment) -> Self {
        Statement::Assignment(value)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for target in &self.targets {
            write!(f, "{} = ", target)?;
        }
        write!(f, "{}", self.value)
    }
}
