//! Structured Value Encoder
//!
//! Encodes host values as JSON text for embedding in scripts. Embedded
//! literal nodes are encoded by their value; every other embedded node is
//! rendered and spliced in verbatim, unquoted.

use crate::config::CompilerConfig;
use crate::error::{CompilerError, Result};
use crate::output::abstract_emitter::{AbstractEmitterVisitor, EmitterVisitorContext};
use crate::output::output_ast as o;
use crate::output::value::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSerializer {
    null_placeholder: String,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        JsonSerializer::with_config(&CompilerConfig::default())
    }
}

impl JsonSerializer {
    pub fn new() -> Self {
        JsonSerializer::default()
    }

    pub fn with_config(config: &CompilerConfig) -> Self {
        JsonSerializer {
            null_placeholder: config.null_placeholder.clone(),
        }
    }

    pub fn serialize(&self, value: &Value) -> Result<String> {
        let mut ctx = EmitterVisitorContext::create_root();
        if let Err(err) = self.serialize_into(value, &mut ctx) {
            tracing::error!(error = %err, "failed to encode structured value");
            return Err(err);
        }
        Ok(ctx.into_source())
    }

    /// Like [`serialize`](Self::serialize), but an absent value yields the
    /// configured placeholder.
    pub fn serialize_or_placeholder(&self, value: Option<&Value>) -> Result<String> {
        match value {
            Some(value) => self.serialize(value),
            None => Ok(self.null_placeholder.clone()),
        }
    }

    pub fn serialize_into(&self, value: &Value, ctx: &mut EmitterVisitorContext) -> Result<()> {
        match value {
            Value::Null => ctx.print("null"),
            Value::Bool(b) => ctx.print(if *b { "true" } else { "false" }),
            Value::Number(n) => ctx.print(&n.to_string()),
            Value::String(s) => ctx.print(&quote(s)?),
            Value::Array(items) => self.serialize_array_into(items, ctx)?,
            Value::Object(entries) => {
                ctx.print("{");
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        ctx.print(",");
                    }
                    ctx.print(&quote(key)?);
                    ctx.print(":");
                    self.serialize_into(item, ctx)?;
                }
                ctx.print("}");
            }
            Value::Expr(expr) => match expr.as_ref() {
                o::Expression::Literal(literal) => self.serialize_literal(literal, ctx)?,
                node => node.visit_expression(&mut self.splice_visitor(), ctx)?,
            },
            Value::Stmt(stmt) => stmt.visit_statement(&mut self.splice_visitor(), ctx)?,
        }
        Ok(())
    }

    pub fn serialize_array_into(&self, items: &[Value], ctx: &mut EmitterVisitorContext) -> Result<()> {
        ctx.print("[");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                ctx.print(",");
            }
            self.serialize_into(item, ctx)?;
        }
        ctx.print("]");
        Ok(())
    }

    fn serialize_literal(&self, literal: &o::Literal, ctx: &mut EmitterVisitorContext) -> Result<()> {
        match literal {
            o::Literal::Array(items) => self.serialize_array_into(items, ctx),
            o::Literal::Object(value) => self.serialize_into(value, ctx),
            other => self.serialize_into(&other.value(), ctx),
        }
    }

    fn splice_visitor(&self) -> AbstractEmitterVisitor {
        AbstractEmitterVisitor::new(self.clone())
    }
}

fn quote(text: &str) -> Result<String> {
    serde_json::to_string(text).map_err(|err| CompilerError::encoding(err.to_string()))
}
