//! Host Values
//!
//! The values application code hands to literals, call arguments and
//! templates before they are coerced into tree nodes.

use crate::output::output_ast as o;
use indexmap::IndexMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A numeric host value. Integers and floats are kept apart so that `42`
/// never renders as `42.0`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }

    /// The exact integral value, if there is one.
    fn as_exact_integer(&self) -> Option<i128> {
        match *self {
            Number::Int(i) => Some(i as i128),
            Number::UInt(u) => Some(u as i128),
            Number::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < u64::MAX as f64
                {
                    Some(f as i128)
                } else {
                    None
                }
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_exact_integer(), other.as_exact_integer()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.as_f64() == other.as_f64(),
            _ => false,
        }
    }
}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.as_exact_integer() {
            Some(i) => i.hash(state),
            None => self.as_f64().to_bits().hash(state),
        }
    }
}

// Plain decimal form, no locale grouping and no forced fraction digits.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::UInt(u) => write!(f, "{}", u),
            Number::Float(v) if v.is_nan() => f.write_str("NaN"),
            Number::Float(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! number_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::Int(n as i64)
            }
        })*
    };
}

macro_rules! number_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(n: $t) -> Self {
                Number::UInt(n as u64)
            }
        })*
    };
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        // Go through the shortest decimal form so 4.2f32 stays 4.2
        Number::Float(n.to_string().parse().unwrap_or(n as f64))
    }
}

/// A host value: a scalar, an ordered collection, a keyed map, or an
/// embedded tree node that renders as raw script.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Expr(Box<o::Expression>),
    Stmt(Box<o::Statement>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Builds an object value from key/value pairs, keeping their order.
    pub fn object<K, V, I>(entries: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null | Value::Expr(_) | Value::Stmt(_) => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(items) => items.hash(state),
            // map equality ignores order, so only the size takes part
            Value::Object(map) => map.len().hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Number(Number::from(n))
            }
        })*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Value {
    fn from(map: IndexMap<String, V>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::UInt(u))
                } else {
                    Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<o::Expression> for Value {
    fn from(expr: o::Expression) -> Self {
        Value::Expr(Box::new(expr))
    }
}

impl From<o::Statement> for Value {
    fn from(stmt: o::Statement) -> Self {
        Value::Stmt(Box::new(stmt))
    }
}

impl From<o::JavaScript> for Value {
    fn from(script: o::JavaScript) -> Self {
        match script {
            o::JavaScript::Expression(expr) => Value::from(expr),
            o::JavaScript::Statement(stmt) => Value::from(stmt),
        }
    }
}

macro_rules! value_from_node {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(node: $t) -> Self {
                Value::Expr(Box::new(o::Expression::from(node)))
            }
        })*
    };
}

value_from_node!(
    o::Identifier,
    o::Literal,
    o::RawExpr,
    o::TemplateExpr,
    o::CallExpr,
    o::CallChainExpr,
    o::AssignmentExpr,
    o::FunctionExpr,
    o::NamedFunctionExpr
);
