use std::fmt::Display;

use crate::{
    ast::Expression,
    error::{Error, Result},
    lexer::TokenKind,
    parser::Carriage,
};

use super::{Block, Statement};

/// One arm of a conditional chain. The final `KUNG WALA` arm has no condition.
#[derive(Debug, PartialEq, Clone)]
pub struct Branch {
    pub condition: Option<Expression>,
    pub body: Block,
}

impl Branch {
    fn parse_conditional(carriage: &mut Carriage) -> Result<Self> {
        if !carriage.is_peek_token(TokenKind::LParen) {
            let token = carriage.next_token()?;
            return Err(Error::expected_token(
                &token,
                [TokenKind::LParen].as_slice().into(),
            ));
        }

        let condition = Expression::expect_and_parse(carriage)?;
        let body = Block::parse(carriage)?;

        Ok(Branch {
            condition: Some(condition),
            body,
        })
    }
}

/// `KUNG (c) {..} KUNG DILI (c) {..} ... KUNG WALA {..}`
#[derive(Debug, PartialEq, Clone)]
pub struct Conditional {
    pub branches: Vec<Branch>,
}

impl Conditional {
    /// Parses a chain whose leading `KUNG` was already consumed. `KUNG DILI`
    /// and `KUNG WALA` are matched before a bare `KUNG`, which starts a new
    /// statement instead of extending the chain.
    pub fn parse(carriage: &mut Carriage) -> Result<Self> {
        if carriage.is_peek_token(TokenKind::Dili) || carriage.is_peek_token(TokenKind::Wala) {
            let token = carriage.next_token()?;
            return Err(Error::unexpected_token(&token));
        }

        let mut branches = vec![Branch::parse_conditional(carriage)?];

        while carriage.is_peek_token(TokenKind::Kung) {
            match carriage.peek_nth(1).map(|token| token.kind) {
                Some(TokenKind::Dili) => {
                    carriage.next_token()?;
                    carriage.next_token()?;
                    branches.push(Branch::parse_conditional(carriage)?);
                }
                Some(TokenKind::Wala) => {
                    carriage.next_token()?;
                    carriage.next_token()?;
                    branches.push(Branch {
                        condition: None,
                        body: Block::parse(carriage)?,
                    });
                    break;
                }
                _ => break,
            }
        }

        Ok(Conditional { branches })
    }
}

impl From<Conditional> for Statement {
    fn from(value: Conditional) -> Self {
        Statement::Conditional(value)
    }
}

impl Display for Conditional {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            match (&branch.condition, i) {
                (Some(condition), 0) => write!(f, "KUNG ({}) {}", condition, branch.body)?,
                (Some(condition), _) => write!(f, "KUNG DILI ({}) {}", condition, branch.body)?,
                (None, _) => write!(f, "KUNG WALA {}", branch.body)?,
            }
        }

        Ok(())
    }
}
