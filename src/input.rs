use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Supplies raw text for `DAWAT`, one value per requested variable.
pub trait InputSource {
    fn next_value(&mut self, name: &str) -> Result<String>;
}

/// Replays a fixed list of values in order.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    values: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_value(&mut self, name: &str) -> Result<String> {
        match self.values.pop_front() {
            Some(value) => Ok(value),
            None => Err(Error::input_unavailable(name)),
        }
    }
}
