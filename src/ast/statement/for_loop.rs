use std::fmt::Display;

use crate::{
    ast::Expression,
    error::{Error, Result},
    lexer::TokenKind,
    parser::Carriage,
};

use super::{Assignment, Block, Increment, Statement};

/// `ALANG SA (init, condition, update) { body }`
#[derive(Debug, PartialEq, Clone)]
pub struct Loop {
    pub init: Box<Statement>,
    pub condition: Expression,
    pub update: Box<Statement>,
    pub body: Block,
}

impl Loop {
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        carriage.expect_tokens(&[TokenKind::Sa])?;
        carriage.expect_tokens(&[TokenKind::LParen])?;

        let init = Self::parse_init(carriage)?;
        carriage.expect_tokens(&[TokenKind::Comma])?;

        let condition = Expression::expect_and_parse(carriage)?;
        carriage.expect_tokens(&[TokenKind::Comma])?;

        let update = Self::parse_update(carriage)?;
        carriage.expect_tokens(&[TokenKind::RParen])?;

        let body = Block::parse(carriage)?;

        Ok(Loop {
            init: Box::new(init),
            condition,
            update: Box::new(update),
            body,
        })
    }

    fn parse_init(carriage: &mut Carriage) -> Result<Statement> {
        let token = carriage.next_token()?;

        if token.kind != TokenKind::Ident {
            return Err(Error::invalid_loop_clause("init", token.position));
        }

        Ok(Assignment::parse(carriage, token, false)?.into())
    }

    fn parse_update(carriage: &mut Carriage) -> Result<Statement> {
        let token = carriage.next_token()?;

        if token.kind != TokenKind::Ident {
            return Err(Error::invalid_loop_clause("update", token.position));
        }

        if carriage.is_peek_token(TokenKind::Increment)
            || carriage.is_peek_token(TokenKind::Decrement)
        {
            Ok(Increment::parse(carriage, token)?.into())
        } else {
            Ok(Assignment::parse(carriage, token, false)?.into())
        }
    }
}

impl From<Loop> for Statement {
    fn from(value: Loop) -> Self {
        Statement::Loop(value)
    }
}

impl Display for Loop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ALANG SA ({}, {}, {}) {}",
            self.init, self.condition, self.update, self.body
        )
    }
}
