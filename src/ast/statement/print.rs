use std::fmt::Display;

use crate::{
    ast::Expression,
    error::{Error, Result},
    lexer::TokenKind,
    parser::Carriage,
};

use super::Statement;

/// One `&`-separated piece of a print statement.
#[derive(Debug, PartialEq, Clone)]
pub enum Segment {
    Newline,
    Escape(char),
    Expression(Expression),
}

impl Segment {
    fn parse(carriage: &mut Carriage) -> Result<Self> {
        let segment = match carriage.peek_token()?.kind {
            TokenKind::Dollar => {
                carriage.next_token()?;
                Segment::Newline
            }
            TokenKind::Escape => {
                let token = carriage.next_token()?;
                let escaped = token
                    .literal
                    .chars()
                    .next()
                    .ok_or_else(|| Error::unexpected_token(&token))?;
                Segment::Escape(escaped)
            }
            _ => Segment::Expression(Expression::expect_and_parse(carriage)?),
        };

        Ok(segment)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Newline => write!(f, "$"),
            Segment::Escape(ch) => write!(f, "[{}]", ch),
            Segment::Expression(expression) => write!(f, "{}", expression),
        }
    }
}

/// `IPAKITA: segment & segment & ...`
#[derive(Debug, PartialEq, Clone)]
pub struct Print(Vec<Segment>);

impl Print {
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        carriage.expect_tokens(&[TokenKind::Colon])?;

        let mut segments = Vec::new();

        loop {
            segments.push(Segment::parse(carriage)?);

            if carriage.is_peek_token(TokenKind::Ampersand) {
                carriage.next_token()?;
            } else {
                break;
            }
        }

        Ok(Self(segments))
    }
}

impl From<Vec<Segment>> for Print {
    fn from(value: Vec<Segment>) -> Self {
        Self(value)
    }
}

impl AsRef<Vec<Segment>> for Print {
    fn as_ref(&self) -> &Vec<Segment> {
        &self.0
    }
}

impl From<Print> for Statement {
    fn from(value: Print) -> Self {
        Statement::Print(value)
    }
}

impl Display for Print {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IPAKITA: ")?;

        let mut iter = self.0.iter().peekable();
        while let Some(segment) = iter.next() {
            if iter.peek().is_some() {
                write!(f, "{} & ", segment)?;
            } else {
                write!(f, "{}", segment)?;
            }
        }

        Ok(())
    }
}
