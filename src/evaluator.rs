use std::cmp::Ordering;

use crate::{
    ast::{Expression, Infix, Operator, Prefix},
    environment::Environment,
    error::{Error, Result, RuntimeError},
    object::Object,
};

/// Evaluates an expression against the current variable state.
pub fn evaluate(expression: &Expression, env: &Environment) -> Result<Object> {
    match expression {
        Expression::Literal(object) => Ok(object.clone()),
        Expression::Ident(ident) => Ok(env.get(ident.as_ref())?.clone()),
        Expression::PrefixExpression(prefix) => evaluate_prefix(prefix, env),
        Expression::InfixExpression(infix) => evaluate_infix(infix, env),
    }
}

fn evaluate_prefix(prefix: &Prefix, env: &Environment) -> Result<Object> {
    let right = evaluate(&prefix.right, env)?;
    let operator = prefix.operator;

    match (operator, right) {
        (_, Object::Null) => Err(RuntimeError::UnsetValue(operator).into()),
        (Operator::Not, Object::Tinuod(b)) => Ok(Object::Tinuod(!b)),
        (Operator::Sub, Object::Numero(i)) => i
            .checked_neg()
            .map(Object::Numero)
            .ok_or_else(|| RuntimeError::Overflow(operator).into()),
        (Operator::Sub, Object::Tipik(f)) => Ok(Object::Tipik(-f)),
        (Operator::Add, right @ (Object::Numero(_) | Object::Tipik(_))) => Ok(right),
        (_, right) => Err(RuntimeError::UnsupportedOperand {
            operator,
            operand: right.type_name(),
        }
        .into()),
    }
}

fn evaluate_infix(infix: &Infix, env: &Environment) -> Result<Object> {
    if infix.operator.is_logical() {
        return evaluate_logical(infix, env);
    }

    let left = evaluate(&infix.left, env)?;
    let right = evaluate(&infix.right, env)?;

    binary(infix.operator, left, right)
}

// UG and O only look at the right operand when the left does not decide
fn evaluate_logical(infix: &Infix, env: &Environment) -> Result<Object> {
    let operator = infix.operator;

    let left = expect_boolean(operator, evaluate(&infix.left, env)?)?;
    match (operator, left) {
        (Operator::And, false) => return Ok(Object::Tinuod(false)),
        (Operator::Or, true) => return Ok(Object::Tinuod(true)),
        _ => {}
    }

    let right = expect_boolean(operator, evaluate(&infix.right, env)?)?;
    Ok(Object::Tinuod(right))
}

fn expect_boolean(operator: Operator, object: Object) -> Result<bool> {
    match object {
        Object::Tinuod(b) => Ok(b),
        Object::Null => Err(RuntimeError::UnsetValue(operator).into()),
        other => Err(RuntimeError::UnsupportedOperand {
            operator,
            operand: other.type_name(),
        }
        .into()),
    }
}

/// Applies a non-logical binary operator to two already evaluated operands.
pub fn binary(operator: Operator, left: Object, right: Object) -> Result<Object> {
    if left.is_null() || right.is_null() {
        return Err(RuntimeError::UnsetValue(operator).into());
    }

    if operator.is_comparison() {
        return compare(operator, &left, &right);
    }

    match (left, right) {
        (Object::Numero(l), Object::Numero(r)) => integer_arithmetic(operator, l, r),
        (Object::Numero(l), Object::Tipik(r)) => float_arithmetic(operator, l as f64, r),
        (Object::Tipik(l), Object::Numero(r)) => float_arithmetic(operator, l, r as f64),
        (Object::Tipik(l), Object::Tipik(r)) => float_arithmetic(operator, l, r),
        (left @ Object::Letra(_), right) | (left, right @ Object::Letra(_))
            if operator == Operator::Add =>
        {
            Ok(Object::Letra(format!("{}{}", left, right)))
        }
        (left, right) => Err(unsupported(operator, &left, &right)),
    }
}

fn integer_arithmetic(operator: Operator, left: i64, right: i64) -> Result<Object> {
    if matches!(operator, Operator::Div | Operator::Mod) && right == 0 {
        return Err(RuntimeError::DivisionByZero.into());
    }

    let result = match operator {
        Operator::Add => left.checked_add(right),
        Operator::Sub => left.checked_sub(right),
        Operator::Mul => left.checked_mul(right),
        Operator::Div => left.checked_div(right),
        Operator::Mod => left.checked_rem(right),
        _ => {
            return Err(unsupported(
                operator,
                &Object::Numero(left),
                &Object::Numero(right),
            ))
        }
    };

    result
        .map(Object::Numero)
        .ok_or_else(|| RuntimeError::Overflow(operator).into())
}

fn float_arithmetic(operator: Operator, left: f64, right: f64) -> Result<Object> {
    if matches!(operator, Operator::Div | Operator::Mod) && right == 0.0 {
        return Err(RuntimeError::DivisionByZero.into());
    }

    let result = match operator {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => left / right,
        Operator::Mod => left % right,
        _ => {
            return Err(unsupported(
                operator,
                &Object::Tipik(left),
                &Object::Tipik(right),
            ))
        }
    };

    Ok(Object::Tipik(result))
}

fn compare(operator: Operator, left: &Object, right: &Object) -> Result<Object> {
    let ordering = match (left, right) {
        (Object::Numero(l), Object::Numero(r)) => Some(l.cmp(r)),
        (Object::Numero(l), Object::Tipik(r)) => (*l as f64).partial_cmp(r),
        (Object::Tipik(l), Object::Numero(r)) => l.partial_cmp(&(*r as f64)),
        (Object::Tipik(l), Object::Tipik(r)) => l.partial_cmp(r),
        (Object::Letra(l), Object::Letra(r)) => Some(l.cmp(r)),
        (Object::Tinuod(l), Object::Tinuod(r))
            if matches!(operator, Operator::Equal | Operator::NotEqual) =>
        {
            Some(l.cmp(r))
        }
        _ => return Err(unsupported(operator, left, right)),
    };

    // NaN compares false to everything except `<>`
    let result = match ordering {
        None => operator == Operator::NotEqual,
        Some(ordering) => match operator {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LesserThan => ordering == Ordering::Less,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LesserEquals => ordering != Ordering::Greater,
            Operator::GreaterEquals => ordering != Ordering::Less,
            _ => return Err(unsupported(operator, left, right)),
        },
    };

    Ok(Object::Tinuod(result))
}

fn unsupported(operator: Operator, left: &Object, right: &Object) -> Error {
    RuntimeError::UnsupportedOperands {
        operator,
        left: left.type_name(),
        right: right.type_name(),
    }
    .into()
}
