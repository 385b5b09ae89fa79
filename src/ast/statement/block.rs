use std::fmt::Display;

use crate::{
    error::{Error, Result},
    lexer::TokenKind,
    parser::Carriage,
};

use super::Statement;

/// `[PUNDOK]{ statements }`
#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        if carriage.is_peek_token(TokenKind::Pundok) {
            carriage.next_token()?;
        }

        let opener = carriage.expect_tokens(&[TokenKind::LSquirly])?;

        let mut statements = Vec::new();

        while !carriage.is_peek_token(TokenKind::RSquirly) {
            // KATAPUSAN cannot appear inside a block, so the block was never closed
            if carriage.is_peek_token(TokenKind::Eof) || carriage.is_peek_token(TokenKind::Katapusan) {
                return Err(Error::unclosed_block(opener.position));
            }

            let statement = Statement::parse(carriage)?;
            statements.push(statement);
        }

        carriage.expect_tokens(&[TokenKind::RSquirly])?;

        let block = Block { statements };

        Ok(block)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PUNDOK{{")?;
        for s in &self.statements {
            writeln!(f, "{}", s)?;
        }
        write!(f, "}}")
    }
}
