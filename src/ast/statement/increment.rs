use std::fmt::Display;

use crate::{
    ast::{primitive::Identifier, Operator},
    error::Result,
    lexer::{Token, TokenKind},
    parser::Carriage,
};

use super::Statement;

/// `name++` or `name--`.
#[derive(Debug, PartialEq, Clone)]
pub struct Increment {
    pub ident: Identifier,
    pub operator: Operator,
}

impl Increment {
    pub fn parse(carriage: &mut Carriage, current: Token) -> Result<Self> {
        let token = carriage.expect_tokens(&[TokenKind::Increment, TokenKind::Decrement])?;

        let operator = match token.kind {
            TokenKind::Increment => Operator::Add,
            _ => Operator::Sub,
        };

        Ok(Increment {
            ident: Identifier::from(&current),
            operator,
        })
    }
}

impl From<Increment> for Statement {
    fn from(value: Increment) -> Self {
        Statement::Increment(value)
    }
}

impl Display for Increment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            Operator::Add => write!(f, "{}++", self.ident),
            _ => write!(f, "{}--", self.ident),
        }
    }
}
