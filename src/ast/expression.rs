mod infix;
mod operator;
mod prefix;
pub mod primitive;

use std::fmt::Display;

use crate::{
    error::{Error, Result},
    lexer::{Token, TokenKind},
    object::Object,
    parser::{Carriage, Precedence},
};

pub use self::{infix::Infix, operator::Operator, prefix::Prefix};

use self::primitive::Identifier;

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Object),
    Ident(Identifier),
    PrefixExpression(Prefix),
    InfixExpression(Infix),
}

impl Expression {
    pub fn parse(carriage: &mut Carriage, current: Token, precedence: Precedence) -> Result<Self> {
        let mut expression = Self::parse_prefix(carriage, current)?;

        while precedence < carriage.peek_precedence()? {
            let operator = carriage.next_token()?;
            expression = Infix::parse(carriage, operator, expression)?.into();
        }

        Ok(expression)
    }

    pub fn expect_and_parse(carriage: &mut Carriage) -> Result<Self> {
        let current = carriage.next_token()?;
        Self::parse(carriage, current, Precedence::Lowest)
    }

    fn parse_prefix(carriage: &mut Carriage, current: Token) -> Result<Self> {
        match current.kind {
            TokenKind::IntLiteral => Self::parse_int_literal(&current),
            TokenKind::FloatLiteral => Self::parse_float_literal(&current),
            TokenKind::StringLiteral => Ok(Self::parse_string_literal(&current)),
            TokenKind::Oo => Ok(Expression::Literal(Object::Tinuod(true))),
            TokenKind::Dili if Self::is_false_literal(carriage, &current)? => {
                Ok(Expression::Literal(Object::Tinuod(false)))
            }
            TokenKind::Ident => Ok(Expression::Ident(Identifier::from(&current))),
            TokenKind::LParen => Self::parse_grouped_expression(carriage),
            TokenKind::Minus | TokenKind::Plus | TokenKind::Dili => {
                Ok(Prefix::parse(carriage, current)?.into())
            }
            _ => Err(Error::unexpected_token(&current)),
        }
    }

    /// A bare `DILI` is the false literal unless an operand follows it on the
    /// same line. A name that begins the next statement (`y = 5`, `y++`) is
    /// never its operand either.
    fn is_false_literal(carriage: &Carriage, current: &Token) -> Result<bool> {
        let next = carriage.peek_token()?;

        if !Self::starts_operand(next.kind) || next.position.line > current.position.line {
            return Ok(true);
        }

        let starts_statement = next.kind == TokenKind::Ident
            && matches!(
                carriage.peek_nth(1).map(|token| token.kind),
                Some(TokenKind::Assign | TokenKind::Increment | TokenKind::Decrement)
            );

        Ok(starts_statement)
    }

    /// Whether a token of this kind can begin an operand.
    pub fn starts_operand(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::Ident
                | TokenKind::LParen
                | TokenKind::Oo
                | TokenKind::Dili
                | TokenKind::Minus
                | TokenKind::Plus
        )
    }

    fn parse_grouped_expression(carriage: &mut Carriage) -> Result<Self> {
        let expression = Self::expect_and_parse(carriage)?;

        carriage.expect_tokens(&[TokenKind::RParen])?;

        Ok(expression)
    }

    fn parse_int_literal(token: &Token) -> Result<Self> {
        let literal = token
            .literal
            .parse::<i64>()
            .map_err(|_| Error::invalid_number(token))?;
        Ok(Expression::Literal(Object::Numero(literal)))
    }

    fn parse_float_literal(token: &Token) -> Result<Self> {
        let literal = token
            .literal
            .parse::<f64>()
            .map_err(|_| Error::invalid_number(token))?;
        Ok(Expression::Literal(Object::Tipik(literal)))
    }

    // "OO" and "DILI" are the boolean literals, whichever quote they use
    fn parse_string_literal(token: &Token) -> Self {
        let object = match token.literal() {
            "OO" => Object::Tinuod(true),
            "DILI" => Object::Tinuod(false),
            literal => Object::Letra(literal.to_string()),
        };

        Expression::Literal(object)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(object) => write!(f, "{}", object.source_literal()),
            Expression::Ident(ident) => write!(f, "{}", ident),
            Expression::PrefixExpression(prefix) => write!(f, "{}", prefix),
            Expression::InfixExpression(infix) => write!(f, "{}", infix),
        }
    }
}

impl From<Object> for Expression {
    fn from(value: Object) -> Self {
        Expression::Literal(value)
    }
}
