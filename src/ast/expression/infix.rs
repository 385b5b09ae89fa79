use std::fmt::Display;

use crate::{
    error::Result,
    lexer::Token,
    parser::{Carriage, Precedence},
};

use super::{Expression, Operator};

#[derive(Debug, PartialEq, Clone)]
pub struct Infix {
    pub left: Box<Expression>,
    pub operator: Operator,
    pub right: Box<Expression>,
}

impl Infix {
    pub fn parse(carriage: &mut Carriage, current: Token, left: Expression) -> Result<Self> {
        let precedence = Precedence::from(&current);
        let operator = Operator::parse(&current)?;

        let next = carriage.next_token()?;
        let right = Expression::parse(carriage, next, precedence)?;

        let expression = Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        };

        Ok(expression)
    }
}

impl From<Infix> for Expression {
    fn from(value: Infix) -> Self {
        Expression::InfixExpression(value)
    }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
