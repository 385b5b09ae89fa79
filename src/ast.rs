mod expression;
mod statement;

pub use expression::{primitive, Expression, Infix, Operator, Prefix};
pub use statement::{
    Assignment, Block, Conditional, DataType, Declaration, Increment, Input, Loop, Print, Segment,
    Statement,
};

#[cfg(test)]
pub use statement::Data;

use std::fmt::Display;

#[derive(Debug, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SUGOD")?;
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        writeln!(f, "KATAPUSAN")
    }
}
