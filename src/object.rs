use std::fmt::Display;

use crate::ast::DataType;

/// Runtime value. `Null` marks a declared variable that was never given one.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Numero(i64),
    Tipik(f64),
    Letra(String),
    Tinuod(bool),
    Null,
}

impl Object {
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Object::Numero(_) => Some(DataType::Numero),
            Object::Tipik(_) => Some(DataType::Tipik),
            Object::Letra(_) => Some(DataType::Letra),
            Object::Tinuod(_) => Some(DataType::Tinuod),
            Object::Null => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Numero(_) => "NUMERO",
            Object::Tipik(_) => "TIPIK",
            Object::Letra(_) => "LETRA",
            Object::Tinuod(_) => "TINUOD",
            Object::Null => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    /// Renders the value the way it would be written in a program, so that
    /// printed code lexes back to the same literal.
    pub fn source_literal(&self) -> String {
        match self {
            Object::Numero(i) => i.to_string(),
            Object::Tipik(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.1}", f),
            Object::Tipik(f) => f.to_string(),
            Object::Letra(s) if s.contains('"') => format!("'{}'", s),
            Object::Letra(s) => format!("\"{}\"", s),
            Object::Tinuod(true) => "\"OO\"".to_string(),
            Object::Tinuod(false) => "\"DILI\"".to_string(),
            Object::Null => "null".to_string(),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Numero(i) => write!(f, "{}", i),
            Object::Tipik(t) => write!(f, "{}", t),
            Object::Letra(s) => write!(f, "{}", s),
            Object::Tinuod(true) => write!(f, "OO"),
            Object::Tinuod(false) => write!(f, "DILI"),
            Object::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Numero(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Tipik(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Tinuod(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::Letra(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::Letra(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let tests = vec![
            (Object::Numero(-4), "-4"),
            (Object::Tipik(2.5), "2.5"),
            (Object::Tipik(3.0), "3"),
            (Object::Letra("c".into()), "c"),
            (Object::Tinuod(true), "OO"),
            (Object::Tinuod(false), "DILI"),
            (Object::Null, "null"),
        ];

        for (object, expected) in tests {
            let got = object.to_string();
            assert_eq!(expected, got, "expected={}, got={}", expected, got);
        }
    }

    #[test]
    fn test_source_literal() {
        let tests = vec![
            (Object::Numero(12), "12"),
            (Object::Tipik(3.0), "3.0"),
            (Object::Tipik(0.25), "0.25"),
            (Object::Letra("ka".into()), "\"ka\""),
            (Object::Letra("say \"hi\"".into()), "'say \"hi\"'"),
            (Object::Tinuod(true), "\"OO\""),
            (Object::Tinuod(false), "\"DILI\""),
        ];

        for (object, expected) in tests {
            let got = object.source_literal();
            assert_eq!(expected, got, "expected={}, got={}", expected, got);
        }
    }
}
