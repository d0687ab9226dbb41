//! Value Coercion
//!
//! Turns host values into tree nodes. Nodes pass through untouched,
//! everything else becomes a literal of the matching kind.

use crate::error::{CompilerError, Result};
use crate::output::output_ast::{Expression, Identifier, JavaScript, Literal, ParamList, Statement};
use crate::output::value::Value;
use serde::Serialize;

/// Builds a `Vec<Value>` of call arguments from mixed host values.
///
/// ```
/// use js_compiler::args;
/// let arguments = args!["arg", 1, true];
/// assert_eq!(arguments.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::output::value::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::output::value::Value::from($arg)),+]
    };
}

pub fn as_expression(value: impl Into<Value>) -> Expression {
    match value.into() {
        Value::Expr(expr) => *expr,
        Value::Null => Expression::Literal(Literal::Null),
        Value::Bool(b) => Expression::Literal(Literal::of_bool(b).clone()),
        Value::Number(n) => Expression::Literal(Literal::Number(n)),
        Value::String(s) => Expression::Literal(Literal::String(s)),
        // elements stay host values; the serializer handles them
        Value::Array(items) => Expression::Literal(Literal::Array(items)),
        other @ (Value::Object(_) | Value::Stmt(_)) => Expression::Literal(Literal::Object(other)),
    }
}

pub fn as_argument_list<I>(values: I) -> Vec<Expression>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    values.into_iter().map(as_expression).collect()
}

/// Fails on the first empty name.
pub fn as_identifier_list<I, S>(names: I) -> Result<ParamList>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Identifier::new).collect()
}

pub fn as_statement_list<I>(scripts: I) -> Vec<Statement>
where
    I: IntoIterator,
    I::Item: Into<JavaScript>,
{
    scripts.into_iter().map(Statement::of).collect()
}

/// Converts any serializable host type into a [`Value`], keeping field order.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    match serde_json::to_value(value) {
        Ok(json) => Ok(Value::from(json)),
        Err(err) => {
            tracing::error!(error = %err, "host value is not representable as a literal");
            Err(CompilerError::encoding(err.to_string()))
        }
    }
}
