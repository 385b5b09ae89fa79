use tracing::{debug, trace};

use crate::{
    ast::{
        Assignment, Block, Conditional, DataType, Declaration, Expression, Increment, Input, Loop,
        Print, Program, Statement,
    },
    environment::Environment,
    error::{Result, RuntimeError},
    evaluator::{binary, evaluate},
    formatter::render,
    input::InputSource,
    object::Object,
};

/// Runs statements against a borrowed environment. Output lines are appended
/// to the vector handed to `run`, so whatever was printed before a failing
/// statement stays with the caller.
pub struct Executor<'a> {
    environment: &'a mut Environment,
    input: &'a mut dyn InputSource,
}

impl<'a> Executor<'a> {
    pub fn new(environment: &'a mut Environment, input: &'a mut dyn InputSource) -> Self {
        Self { environment, input }
    }

    pub fn run(&mut self, program: &Program, output: &mut Vec<String>) -> Result<()> {
        for statement in &program.statements {
            self.execute(statement, output)?;
        }

        Ok(())
    }

    pub fn execute(&mut self, statement: &Statement, output: &mut Vec<String>) -> Result<()> {
        debug!(statement = statement.name(), "execute");

        match statement {
            Statement::Declaration(declaration) => self.execute_declaration(declaration),
            Statement::Assignment(assignment) => self.execute_assignment(assignment),
            Statement::Increment(increment) => self.execute_increment(increment),
            Statement::Print(print) => self.execute_print(print, output),
            Statement::Input(input) => self.execute_input(input),
            Statement::Conditional(conditional) => self.execute_conditional(conditional, output),
            Statement::Loop(lp) => self.execute_loop(lp, output),
        }
    }

    fn execute_block(&mut self, block: &Block, output: &mut Vec<String>) -> Result<()> {
        for statement in &block.statements {
            self.execute(statement, output)?;
        }

        Ok(())
    }

    fn execute_declaration(&mut self, declaration: &Declaration) -> Result<()> {
        for data in &declaration.data {
            self.environment
                .declare(data.ident.as_ref(), declaration.ty, data.value.clone())?;
        }

        Ok(())
    }

    // the value is computed once, then stored right to left
    fn execute_assignment(&mut self, assignment: &Assignment) -> Result<()> {
        let value = evaluate(&assignment.value, self.environment)?;

        for target in assignment.targets.iter().rev() {
            self.environment.assign(target.as_ref(), value.clone())?;
        }

        Ok(())
    }

    fn execute_increment(&mut self, increment: &Increment) -> Result<()> {
        let name = increment.ident.as_ref();
        let operator = increment.operator;

        let value = match self.environment.get(name)? {
            Object::Null => return Err(RuntimeError::UnsetValue(operator).into()),
            value @ (Object::Numero(_) | Object::Tipik(_)) => value.clone(),
            other => {
                return Err(RuntimeError::UnsupportedOperand {
                    operator,
                    operand: other.type_name(),
                }
                .into())
            }
        };

        let updated = binary(operator, value, Object::Numero(1))?;
        self.environment.assign(name, updated)
    }

    fn execute_print(&mut self, print: &Print, output: &mut Vec<String>) -> Result<()> {
        let lines = render(print.as_ref(), self.environment)?;
        trace!(lines = lines.len(), "print");
        output.extend(lines);

        Ok(())
    }

    fn execute_input(&mut self, input: &Input) -> Result<()> {
        for ident in input.as_ref() {
            let name = ident.as_ref();
            let ty = self.environment.lookup(name)?.ty;

            let raw = self.input.next_value(name)?;
            let value = parse_input(name, ty, &raw)?;

            self.environment.assign(name, value)?;
        }

        Ok(())
    }

    fn execute_conditional(
        &mut self,
        conditional: &Conditional,
        output: &mut Vec<String>,
    ) -> Result<()> {
        for branch in &conditional.branches {
            let taken = match &branch.condition {
                Some(condition) => self.condition(condition)?,
                None => true,
            };

            if taken {
                return self.execute_block(&branch.body, output);
            }
        }

        Ok(())
    }

    fn execute_loop(&mut self, lp: &Loop, output: &mut Vec<String>) -> Result<()> {
        self.execute(&lp.init, output)?;

        let mut iteration = 0usize;
        while self.condition(&lp.condition)? {
            trace!(iteration, "loop iteration");
            self.execute_block(&lp.body, output)?;
            self.execute(&lp.update, output)?;
            iteration += 1;
        }

        Ok(())
    }

    fn condition(&self, expression: &Expression) -> Result<bool> {
        match evaluate(expression, self.environment)? {
            Object::Tinuod(b) => Ok(b),
            other => Err(RuntimeError::ExpectedBoolean {
                got: other.type_name(),
            }
            .into()),
        }
    }
}

/// Converts one raw input value to the declared type of its target.
pub fn parse_input(name: &str, ty: DataType, raw: &str) -> Result<Object> {
    let trimmed = raw.trim();

    let value = match ty {
        DataType::Numero => trimmed.parse::<i64>().ok().map(Object::Numero),
        DataType::Tipik => trimmed
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Object::Tipik),
        DataType::Letra => Some(Object::Letra(strip_quotes(trimmed).to_string())),
        DataType::Tinuod => match trimmed.to_ascii_uppercase().as_str() {
            "OO" => Some(Object::Tinuod(true)),
            "DILI" => Some(Object::Tinuod(false)),
            _ => None,
        },
    };

    value.ok_or_else(|| {
        RuntimeError::InvalidInput {
            ident: name.to_string(),
            ty,
            raw: raw.to_string(),
        }
        .into()
    })
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }

    text
}
