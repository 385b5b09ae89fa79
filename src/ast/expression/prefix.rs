use std::fmt::Display;

use crate::{
    error::Result,
    lexer::Token,
    parser::{Carriage, Precedence},
};

use super::{operator::Operator, Expression};

#[derive(Debug, PartialEq, Clone)]
pub struct Prefix {
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl Prefix {
    pub fn parse(carriage: &mut Carriage, current: Token) -> Result<Self> {
        let operator = Operator::parse(&current)?;

        let next = carriage.next_token()?;
        let expression = Expression::parse(carriage, next, Precedence::Prefix)?;

        let expression = Prefix {
            operator,
            right: Box::new(expression),
        };

        Ok(expression)
    }
}

impl From<Prefix> for Expression {
    fn from(value: Prefix) -> Self {
        Expression::PrefixExpression(value)
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            Operator::Not => write!(f, "({} {})", self.operator, self.right),
            operator => write!(f, "({}{})", operator, self.right),
        }
    }
}
