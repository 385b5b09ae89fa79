mod ast;
pub mod cli;
mod environment;
mod error;
mod evaluator;
mod executor;
mod formatter;
mod input;
mod lexer;
mod object;
mod parser;

use tracing::info;

pub use {
    ast::{DataType, Program},
    clap::Parser,
    environment::{Environment, Variable},
    error::{Error, ErrorCategory, ErrorKind, Result},
    executor::Executor,
    input::{InputSource, ScriptedInput},
    lexer::{tokenize, Position, Token, TokenKind},
    object::Object,
};

/// Lexes and parses a whole program.
pub fn parse(source: &str) -> Result<Program> {
    parser::parse(tokenize(source))
}

/// Parses and runs `source` in a fresh environment, appending printed lines
/// to `output`. On failure the lines printed so far remain in `output`.
pub fn interpret(
    source: &str,
    input: &mut dyn InputSource,
    output: &mut Vec<String>,
) -> Result<Environment> {
    let program = parse(source)?;
    info!(statements = program.statements.len(), "program parsed");

    let mut environment = Environment::new();
    Executor::new(&mut environment, input).run(&program, output)?;

    info!(
        lines = output.len(),
        variables = environment.len(),
        "program finished"
    );

    Ok(environment)
}
