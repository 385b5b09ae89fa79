mod assignment;
mod block;
mod conditional;
mod declaration;
mod for_loop;
mod increment;
mod input;
mod print;

use std::fmt::Display;

use tracing::trace;

use crate::{
    error::{Error, Result},
    lexer::TokenKind,
    parser::Carriage,
};

#[cfg(test)]
pub use self::declaration::Data;

pub use self::{
    assignment::Assignment,
    block::Block,
    conditional::Conditional,
    declaration::{DataType, Declaration},
    for_loop::Loop,
    increment::Increment,
    input::Input,
    print::{Print, Segment},
};

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
    Increment(Increment),
    Print(Print),
    Input(Input),
    Conditional(Conditional),
    Loop(Loop),
}

impl Statement {
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        let current = carriage.next_token()?;
        trace!(token = %current, position = %current.position, "parsing statement");

        let statement = match current.kind {
            TokenKind::Mugna => Declaration::parse(carriage)?.into(),
            TokenKind::Ipakita => Print::parse(carriage)?.into(),
            TokenKind::Dawat => Input::parse(carriage)?.into(),
            TokenKind::Kung => Conditional::parse(carriage)?.into(),
            TokenKind::Alang => Loop::parse(carriage)?.into(),
            TokenKind::Ident
                if carriage.is_peek_token(TokenKind::Increment)
                    || carriage.is_peek_token(TokenKind::Decrement) =>
            {
                Increment::parse(carriage, current)?.into()
            }
            TokenKind::Ident => Assignment::parse(carriage, current, true)?.into(),
            _ => return Err(Error::unexpected_token(&current)),
        };

        Ok(statement)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Statement::Declaration(_) => "declaration",
            Statement::Assignment(_) => "assignment",
            Statement::Increment(_) => "increment",
            Statement::Print(_) => "print",
            Statement::Input(_) => "input",
            Statement::Conditional(_) => "conditional",
            Statement::Loop(_) => "loop",
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Declaration(d) => write!(f, "{}", d),
            Statement::Assignment(a) => write!(f, "{}", a),
            Statement::Increment(i) => write!(f, "{}", i),
            Statement::Print(p) => write!(f, "{}", p),
            Statement::Input(i) => write!(f, "{}", i),
            Statement::Conditional(c) => write!(f, "{}", c),
            Statement::Loop(l) => write!(f, "{}", l),
        }
    }
}
