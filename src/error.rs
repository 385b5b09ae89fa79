use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::{DataType, Operator},
    lexer::{Position, Token, TokenKind, TokenKinds},
};

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error classes a caller reports to the user.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCategory {
    Syntax,
    Declaration,
    Reference,
    Type,
    Arithmetic,
    Input,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Declaration => "DeclarationError",
            ErrorCategory::Reference => "ReferenceError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Arithmetic => "ArithmeticError",
            ErrorCategory::Input => "InputError",
        };

        write!(f, "{}", name)
    }
}

#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    ExpectToken,
    Eof,
    UnexpectedToken,
    IllegalToken,
    MissingStart,
    MissingEnd,
    UnclosedBlock,
    InvalidNumber,
    InvalidLoopClause,
    DuplicateDeclaration,
    LiteralMismatch,
    UndefinedVariable,
    UnsupportedOperands,
    UnsupportedOperand,
    AssignmentType,
    ExpectedBoolean,
    UnsetValue,
    InvalidInput,
    DivisionByZero,
    Overflow,
    InputUnavailable,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::ExpectToken
            | ErrorKind::Eof
            | ErrorKind::UnexpectedToken
            | ErrorKind::IllegalToken
            | ErrorKind::MissingStart
            | ErrorKind::MissingEnd
            | ErrorKind::UnclosedBlock
            | ErrorKind::InvalidNumber
            | ErrorKind::InvalidLoopClause => ErrorCategory::Syntax,
            ErrorKind::DuplicateDeclaration | ErrorKind::LiteralMismatch => {
                ErrorCategory::Declaration
            }
            ErrorKind::UndefinedVariable => ErrorCategory::Reference,
            ErrorKind::UnsupportedOperands
            | ErrorKind::UnsupportedOperand
            | ErrorKind::AssignmentType
            | ErrorKind::ExpectedBoolean
            | ErrorKind::UnsetValue
            | ErrorKind::InvalidInput => ErrorCategory::Type,
            ErrorKind::DivisionByZero | ErrorKind::Overflow => ErrorCategory::Arithmetic,
            ErrorKind::InputUnavailable => ErrorCategory::Input,
        }
    }
}

impl From<&ErrorRepr> for ErrorKind {
    fn from(value: &ErrorRepr) -> Self {
        match value {
            ErrorRepr::SyntaxError(e) => e.into(),
            ErrorRepr::DeclarationError(e) => e.into(),
            ErrorRepr::RuntimeError(e) => e.into(),
        }
    }
}

impl From<&SyntaxError> for ErrorKind {
    fn from(value: &SyntaxError) -> Self {
        match value {
            SyntaxError::ExpectToken { .. } => Self::ExpectToken,
            SyntaxError::Eof => Self::Eof,
            SyntaxError::UnexpectedToken { .. } => Self::UnexpectedToken,
            SyntaxError::IllegalToken { .. } => Self::IllegalToken,
            SyntaxError::MissingStart { .. } => Self::MissingStart,
            SyntaxError::MissingEnd { .. } => Self::MissingEnd,
            SyntaxError::UnclosedBlock { .. } => Self::UnclosedBlock,
            SyntaxError::InvalidNumber { .. } => Self::InvalidNumber,
            SyntaxError::InvalidLoopClause { .. } => Self::InvalidLoopClause,
        }
    }
}

impl From<&DeclarationError> for ErrorKind {
    fn from(value: &DeclarationError) -> Self {
        match value {
            DeclarationError::Duplicate(_) => Self::DuplicateDeclaration,
            DeclarationError::LiteralMismatch { .. } => Self::LiteralMismatch,
        }
    }
}

impl From<&RuntimeError> for ErrorKind {
    fn from(value: &RuntimeError) -> Self {
        match value {
            RuntimeError::UndefinedVariable(_) => Self::UndefinedVariable,
            RuntimeError::UnsupportedOperands { .. } => Self::UnsupportedOperands,
            RuntimeError::UnsupportedOperand { .. } => Self::UnsupportedOperand,
            RuntimeError::AssignmentType { .. } => Self::AssignmentType,
            RuntimeError::ExpectedBoolean { .. } => Self::ExpectedBoolean,
            RuntimeError::UnsetValue(_) => Self::UnsetValue,
            RuntimeError::InvalidInput { .. } => Self::InvalidInput,
            RuntimeError::DivisionByZero => Self::DivisionByZero,
            RuntimeError::Overflow(_) => Self::Overflow,
            RuntimeError::InputUnavailable(_) => Self::InputUnavailable,
        }
    }
}

#[derive(Error, Debug)]
#[error("{repr}")]
pub struct Error {
    kind: ErrorKind,
    #[source]
    repr: ErrorRepr,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn eof() -> Self {
        SyntaxError::Eof.into()
    }

    pub fn expected_token(got: &Token, expected: TokenKinds) -> Self {
        match got.kind {
            TokenKind::Illegal => Self::illegal_token(got),
            _ => SyntaxError::ExpectToken {
                got: got.kind,
                literal: got.literal.to_string(),
                position: got.position,
                expected,
            }
            .into(),
        }
    }

    pub fn unexpected_token(token: &Token) -> Self {
        match token.kind {
            TokenKind::Illegal => Self::illegal_token(token),
            _ => SyntaxError::UnexpectedToken {
                kind: token.kind,
                literal: token.literal.to_string(),
                position: token.position,
            }
            .into(),
        }
    }

    pub fn illegal_token(token: &Token) -> Self {
        SyntaxError::IllegalToken {
            literal: token.literal.to_string(),
            position: token.position,
        }
        .into()
    }

    pub fn missing_start(token: &Token) -> Self {
        SyntaxError::MissingStart {
            got: token.kind,
            position: token.position,
        }
        .into()
    }

    pub fn missing_end(position: Position) -> Self {
        SyntaxError::MissingEnd { position }.into()
    }

    pub fn unclosed_block(opened: Position) -> Self {
        SyntaxError::UnclosedBlock { opened }.into()
    }

    pub fn invalid_number(token: &Token) -> Self {
        SyntaxError::InvalidNumber {
            literal: token.literal.to_string(),
            position: token.position,
        }
        .into()
    }

    pub fn invalid_loop_clause(clause: &'static str, position: Position) -> Self {
        SyntaxError::InvalidLoopClause { clause, position }.into()
    }

    pub fn input_unavailable(ident: &str) -> Self {
        RuntimeError::InputUnavailable(ident.to_string()).into()
    }

    pub fn literal_mismatch(ident: &str, ty: DataType, token: &Token) -> Self {
        DeclarationError::LiteralMismatch {
            ident: ident.to_string(),
            ty,
            literal: token.literal.to_string(),
            position: token.position,
        }
        .into()
    }
}

impl From<ErrorRepr> for Error {
    fn from(value: ErrorRepr) -> Self {
        Error {
            kind: ErrorKind::from(&value),
            repr: value,
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(value: SyntaxError) -> Self {
        Self {
            kind: ErrorKind::from(&value),
            repr: value.into(),
        }
    }
}

impl From<DeclarationError> for Error {
    fn from(value: DeclarationError) -> Self {
        Self {
            kind: ErrorKind::from(&value),
            repr: value.into(),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self {
            kind: ErrorKind::from(&value),
            repr: value.into(),
        }
    }
}

#[derive(Debug, Error)]
enum ErrorRepr {
    #[error(transparent)]
    SyntaxError(#[from] SyntaxError),
    #[error(transparent)]
    DeclarationError(#[from] DeclarationError),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("{position}: expected tokens: {expected}. got={got}('{literal}')")]
    ExpectToken {
        got: TokenKind,
        literal: String,
        position: Position,
        expected: TokenKinds,
    },
    #[error("expected a token, but reached EOF")]
    Eof,
    #[error("{position}: unexpected token {kind}('{literal}')")]
    UnexpectedToken {
        kind: TokenKind,
        literal: String,
        position: Position,
    },
    #[error("{position}: unrecognized input '{literal}'")]
    IllegalToken { literal: String, position: Position },
    #[error("{position}: program must open with SUGOD. got={got}")]
    MissingStart { got: TokenKind, position: Position },
    #[error("{position}: program must close with KATAPUSAN")]
    MissingEnd { position: Position },
    #[error("{opened}: block is never closed")]
    UnclosedBlock { opened: Position },
    #[error("{position}: invalid numeric literal '{literal}'")]
    InvalidNumber { literal: String, position: Position },
    #[error("{position}: invalid {clause} clause in loop header")]
    InvalidLoopClause {
        clause: &'static str,
        position: Position,
    },
}

#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error("variable '{0}' is already declared")]
    Duplicate(String),
    #[error("{position}: literal '{literal}' does not match type {ty} of '{ident}'")]
    LiteralMismatch {
        ident: String,
        ty: DataType,
        literal: String,
        position: Position,
    },
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("variable '{0}' is not declared")]
    UndefinedVariable(String),
    #[error("operator `{operator}` is not supported for {left} and {right}")]
    UnsupportedOperands {
        operator: Operator,
        left: &'static str,
        right: &'static str,
    },
    #[error("operator `{operator}` is not supported for {operand}")]
    UnsupportedOperand {
        operator: Operator,
        operand: &'static str,
    },
    #[error("cannot assign {got} to '{ident}' of type {expected}")]
    AssignmentType {
        ident: String,
        expected: DataType,
        got: DataType,
    },
    #[error("condition must be TINUOD. got={got}")]
    ExpectedBoolean { got: &'static str },
    #[error("operator `{0}` applied to a variable without a value")]
    UnsetValue(Operator),
    #[error("invalid {ty} input for '{ident}': '{raw}'")]
    InvalidInput {
        ident: String,
        ty: DataType,
        raw: String,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in `{0}`")]
    Overflow(Operator),
    #[error("no input value available for '{0}'")]
    InputUnavailable(String),
}
