use std::fmt::Display;

use crate::{
    ast::primitive::Identifier,
    error::{Error, Result},
    lexer::{Token, TokenKind},
    object::Object,
    parser::Carriage,
};

use super::Statement;

/// `MUGNA <type> name [= literal], ...`
#[derive(Debug, PartialEq, Clone)]
pub struct Declaration {
    pub ty: DataType,
    pub data: Vec<Data>,
}

impl Declaration {
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        let token = carriage.expect_tokens(&[
            TokenKind::Numero,
            TokenKind::Tipik,
            TokenKind::Letra,
            TokenKind::Tinuod,
        ])?;

        let ty = match token.kind {
            TokenKind::Numero => DataType::Numero,
            TokenKind::Tipik => DataType::Tipik,
            TokenKind::Letra => DataType::Letra,
            TokenKind::Tinuod => DataType::Tinuod,
            _ => unreachable!("current token must be one of the type keywords"),
        };

        let mut data = Vec::new();

        loop {
            data.push(Data::parse(carriage, ty)?);

            if carriage.is_peek_token(TokenKind::Comma) {
                carriage.next_token()?;
            } else {
                break;
            }
        }

        Ok(Self { ty, data })
    }
}

impl From<Declaration> for Statement {
    fn from(value: Declaration) -> Self {
        Statement::Declaration(value)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MUGNA {} ", self.ty)?;

        let mut iter = self.data.iter().peekable();
        while let Some(data) = iter.next() {
            if iter.peek().is_some() {
                write!(f, "{}, ", data)?;
            } else {
                write!(f, "{}", data)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, PartialOrd, Copy, Clone)]
pub enum DataType {
    Numero,
    Tipik,
    Letra,
    Tinuod,
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Numero => write!(f, "NUMERO"),
            DataType::Tipik => write!(f, "TIPIK"),
            DataType::Letra => write!(f, "LETRA"),
            DataType::Tinuod => write!(f, "TINUOD"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Data {
    pub ident: Identifier,
    pub value: Option<Object>,
}

impl Data {
    pub fn parse(carriage: &mut Carriage, ty: DataType) -> Result<Data> {
        let token = carriage.expect_tokens(&[TokenKind::Ident])?;
        let ident = Identifier::from(&token);

        let value = if carriage.is_peek_token(TokenKind::Assign) {
            carriage.next_token()?;
            Some(Self::parse_literal(carriage, &ident, ty)?)
        } else {
            None
        };

        Ok(Data { ident, value })
    }

    // initialisers are literals that lexically match the declared type
    fn parse_literal(carriage: &mut Carriage, ident: &Identifier, ty: DataType) -> Result<Object> {
        let mut token = carriage.next_token()?;
        let mut negative = false;

        if matches!(ty, DataType::Numero | DataType::Tipik)
            && matches!(token.kind, TokenKind::Minus | TokenKind::Plus)
        {
            negative = token.kind == TokenKind::Minus;
            token = carriage.next_token()?;
        }

        let mismatch = |token: &Token| match token.kind {
            TokenKind::Illegal => Error::illegal_token(token),
            _ => Error::literal_mismatch(ident.as_ref(), ty, token),
        };

        let object = match (ty, token.kind) {
            (DataType::Numero, TokenKind::IntLiteral) => {
                let literal = if negative {
                    format!("-{}", token.literal)
                } else {
                    token.literal.to_string()
                };
                let value = literal
                    .parse::<i64>()
                    .map_err(|_| Error::invalid_number(&token))?;
                Object::Numero(value)
            }
            (DataType::Tipik, TokenKind::IntLiteral | TokenKind::FloatLiteral) => {
                let value = token
                    .literal
                    .parse::<f64>()
                    .map_err(|_| Error::invalid_number(&token))?;
                Object::Tipik(if negative { -value } else { value })
            }
            (DataType::Letra, TokenKind::StringLiteral) => Object::Letra(token.literal.to_string()),
            (DataType::Tinuod, TokenKind::StringLiteral) if token.literal == "OO" => {
                Object::Tinuod(true)
            }
            (DataType::Tinuod, TokenKind::StringLiteral) if token.literal == "DILI" => {
                Object::Tinuod(false)
            }
            (DataType::Tinuod, TokenKind::Oo) => Object::Tinuod(true),
            (DataType::Tinuod, TokenKind::Dili) => Object::Tinuod(false),
            _ => return Err(mismatch(&token)),
        };

        Ok(object)
    }
}

impl Display for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} = {}", self.ident, value.source_literal()),
            None => write!(f, "{}", self.ident),
        }
    }
}
