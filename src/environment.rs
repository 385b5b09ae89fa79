use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    ast::DataType,
    error::{DeclarationError, Result, RuntimeError},
    object::Object,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub ty: DataType,
    pub value: Object,
}

impl Variable {
    pub fn new(ty: DataType, value: Object) -> Self {
        Self { ty, value }
    }
}

/// The single flat scope of a program. Blocks do not open nested scopes, so
/// a declaration inside a loop body is visible after the loop.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    store: HashMap<Rc<str>, Variable>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn declare(
        &mut self,
        name: impl Into<Rc<str>>,
        ty: DataType,
        initial: Option<Object>,
    ) -> Result<()> {
        let name = name.into();

        if self.store.contains_key(&name) {
            return Err(DeclarationError::Duplicate(name.to_string()).into());
        }

        let value = initial.unwrap_or(Object::Null);
        Self::check_type(&name, ty, &value)?;

        trace!(name = %name, ty = %ty, value = %value, "declare");
        self.store.insert(name, Variable::new(ty, value));

        Ok(())
    }

    pub fn assign(&mut self, name: &str, value: Object) -> Result<()> {
        let variable = match self.store.get_mut(name) {
            Some(variable) => variable,
            None => return Err(RuntimeError::UndefinedVariable(name.to_string()).into()),
        };

        Self::check_type(name, variable.ty, &value)?;

        trace!(name, value = %value, "assign");
        variable.value = value;

        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Object> {
        Ok(&self.lookup(name)?.value)
    }

    pub fn lookup(&self, name: &str) -> Result<&Variable> {
        match self.store.get(name) {
            Some(variable) => Ok(variable),
            None => Err(RuntimeError::UndefinedVariable(name.to_string()).into()),
        }
    }

    /// All variables ordered by name.
    pub fn variables(&self) -> Vec<(&str, &Variable)> {
        let mut variables: Vec<(&str, &Variable)> = self
            .store
            .iter()
            .map(|(name, variable)| (name.as_ref(), variable))
            .collect();
        variables.sort_by(|a, b| a.0.cmp(b.0));
        variables
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn check_type(name: &str, ty: DataType, value: &Object) -> Result<()> {
        match value.data_type() {
            None => Ok(()),
            Some(got) if got == ty => Ok(()),
            Some(got) => Err(RuntimeError::AssignmentType {
                ident: name.to_string(),
                expected: ty,
                got,
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_declare_and_get() {
        let mut env = Environment::new();
        env.declare("x", DataType::Numero, None).unwrap();
        env.declare("z", DataType::Numero, Some(Object::Numero(5))).unwrap();
        env.declare("c", DataType::Letra, Some(Object::Letra("n".into()))).unwrap();

        let tests = vec![
            ("x", Object::Null),
            ("z", Object::Numero(5)),
            ("c", Object::Letra("n".into())),
        ];

        for (name, expected) in tests {
            let got = env.get(name).unwrap();
            assert_eq!(&expected, got, "{}: expected={:?}, got={:?}", name, expected, got);
        }
    }

    #[test]
    fn test_duplicate_declaration() {
        let mut env = Environment::new();
        env.declare("x", DataType::Numero, None).unwrap();

        for ty in [DataType::Numero, DataType::Tipik, DataType::Letra, DataType::Tinuod] {
            let err = env.declare("x", ty, None).unwrap_err();
            assert_eq!(
                ErrorKind::DuplicateDeclaration,
                err.kind(),
                "expected={:?}, got={:?}",
                ErrorKind::DuplicateDeclaration,
                err.kind()
            );
        }

        assert_eq!(DataType::Numero, env.lookup("x").unwrap().ty);
    }

    #[test]
    fn test_assign() {
        let mut env = Environment::new();
        env.declare("x", DataType::Numero, None).unwrap();
        env.declare("r", DataType::Tipik, None).unwrap();

        env.assign("x", Object::Numero(7)).unwrap();
        assert_eq!(&Object::Numero(7), env.get("x").unwrap());

        env.assign("x", Object::Null).unwrap();
        assert_eq!(&Object::Null, env.get("x").unwrap());

        let tests = vec![
            ("x", Object::Tipik(1.0), ErrorKind::AssignmentType),
            ("r", Object::Numero(1), ErrorKind::AssignmentType),
            ("x", Object::Letra("1".into()), ErrorKind::AssignmentType),
            ("missing", Object::Numero(1), ErrorKind::UndefinedVariable),
        ];

        for (name, value, expected) in tests {
            let got = env.assign(name, value).unwrap_err().kind();
            assert_eq!(expected, got, "{}: expected={:?}, got={:?}", name, expected, got);
        }
    }

    #[test]
    fn test_undefined_lookup() {
        let env = Environment::new();
        let err = env.get("nope").unwrap_err();
        assert_eq!(ErrorKind::UndefinedVariable, err.kind());
    }

    #[test]
    fn test_variables_sorted() {
        let mut env = Environment::new();
        for name in ["b", "c", "a"] {
            env.declare(name, DataType::Tinuod, None).unwrap();
        }

        let names: Vec<&str> = env.variables().into_iter().map(|(name, _)| name).collect();
        assert_eq!(vec!["a", "b", "c"], names, "got={:?}", names);
    }
}
