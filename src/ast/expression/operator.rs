use std::fmt::Display;

use crate::{
    error::{Error, Result},
    lexer::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Equal,
    NotEqual,
    LesserThan,
    GreaterThan,
    LesserEquals,
    GreaterEquals,
    And,
    Or,
    Not,
}

impl Operator {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LesserThan
                | Self::GreaterThan
                | Self::LesserEquals
                | Self::GreaterEquals
        )
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }

    pub fn parse(token: &Token) -> Result<Self> {
        let operator = match token.kind {
            TokenKind::Plus => Operator::Add,
            TokenKind::Minus => Operator::Sub,
            TokenKind::Asterisk => Operator::Mul,
            TokenKind::Slash => Operator::Div,
            TokenKind::Percent => Operator::Mod,
            TokenKind::Equals => Operator::Equal,
            TokenKind::NotEquals => Operator::NotEqual,
            TokenKind::LesserThan => Operator::LesserThan,
            TokenKind::GreaterThan => Operator::GreaterThan,
            TokenKind::LesserEquals => Operator::LesserEquals,
            TokenKind::GreaterEquals => Operator::GreaterEquals,
            TokenKind::Ug => Operator::And,
            TokenKind::O => Operator::Or,
            TokenKind::Dili => Operator::Not,
            _ => return Err(Error::unexpected_token(token)),
        };

        Ok(operator)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literal: &'static str = Into::<&'static str>::into(*self);
        write!(f, "{}", literal)
    }
}

impl From<Operator> for &'static str {
    fn from(value: Operator) -> Self {
        match value {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Equal => "==",
            Operator::NotEqual => "<>",
            Operator::LesserThan => "<",
            Operator::GreaterThan => ">",
            Operator::LesserEquals => "<=",
            Operator::GreaterEquals => ">=",
            Operator::And => "UG",
            Operator::Or => "O",
            Operator::Not => "DILI",
        }
    }
}
