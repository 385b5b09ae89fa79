mod carriage;

use tracing::debug;

use crate::{
    ast::{Program, Statement},
    error::{Error, Result},
    lexer::{Token, TokenKind},
};

pub use carriage::Carriage;

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub enum Precedence {
    Lowest,
    Or,
    And,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
}

impl From<&Token> for Precedence {
    fn from(value: &Token) -> Self {
        match value.kind {
            TokenKind::O => Precedence::Or,
            TokenKind::Ug => Precedence::And,
            TokenKind::Equals | TokenKind::NotEquals => Precedence::Equals,
            TokenKind::LesserThan
            | TokenKind::GreaterThan
            | TokenKind::LesserEquals
            | TokenKind::GreaterEquals => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// Parses a full token stream into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse_program()
}

pub struct Parser {
    carriage: Carriage,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            carriage: Carriage::new(tokens),
        }
    }

    /// `SUGOD statement* KATAPUSAN`, with nothing but comments after the end.
    pub fn parse_program(&mut self) -> Result<Program> {
        let start = self.carriage.next_token()?;
        if start.kind != TokenKind::Sugod {
            return Err(match start.kind {
                TokenKind::Illegal => Error::illegal_token(&start),
                _ => Error::missing_start(&start),
            });
        }

        let mut program = Program::new();

        loop {
            let peek = self.carriage.peek_token()?;
            match peek.kind {
                TokenKind::Katapusan => {
                    self.carriage.next_token()?;
                    break;
                }
                TokenKind::Eof => return Err(Error::missing_end(peek.position)),
                _ => {
                    let statement = Statement::parse(&mut self.carriage)?;
                    debug!(statement = statement.name(), "parsed statement");
                    program.statements.push(statement);
                }
            }
        }

        let trailing = self.carriage.next_token()?;
        if trailing.kind != TokenKind::Eof {
            return Err(Error::unexpected_token(&trailing));
        }

        Ok(program)
    }
}
