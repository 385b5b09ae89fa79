use std::fmt::Display;

use crate::{ast::primitive::Identifier, error::Result, lexer::TokenKind, parser::Carriage};

use super::Statement;

/// `DAWAT: a, b`
#[derive(Debug, PartialEq, Clone)]
pub struct Input(Vec<Identifier>);

impl Input {
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        carriage.expect_tokens(&[TokenKind::Colon])?;

        let mut idents = Vec::new();

        loop {
            let token = carriage.expect_tokens(&[TokenKind::Ident])?;
            idents.push(Identifier::from(&token));

            if carriage.is_peek_token(TokenKind::Comma) {
                carriage.next_token()?;
            } else {
                break;
            }
        }

        Ok(Self(idents))
    }
}

impl From<Vec<Identifier>> for Input {
    fn from(value: Vec<Identifier>) -> Self {
        Self(value)
    }
}

impl AsRef<Vec<Identifier>> for Input {
    fn as_ref(&self) -> &Vec<Identifier> {
        &self.0
    }
}

impl From<Input> for Statement {
    fn from(value: Input) -> Self {
        Statement::Input(value)
    }
}

impl Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DAWAT: ")?;

        let mut iter = self.0.iter().peekable();
        while let Some(ident) = iter.next() {
            if iter.peek().is_some() {
                write!(f, "{}, ", ident)?;
            } else {
                write!(f, "{}", ident)?;
            }
        }

        Ok(())
    }
}
