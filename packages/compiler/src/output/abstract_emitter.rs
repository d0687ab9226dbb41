//! Abstract Emitter Module
//!
//! The render buffer and the visitor that writes each node kind into it.
//! Output is compact: no whitespace beyond the few fixed spaces around
//! `=` and after `var`, `return` and a function's name keyword.

use crate::config::DEFAULT_BUFFER_SIZE;
use crate::error::{CompilerError, Result};
use crate::output::json_serializer::JsonSerializer;
use crate::output::output_ast as o;
use crate::output::output_ast::JsNode;
use crate::output::template::{parse_template, TemplatePart};
use crate::output::value::Value;

pub struct EmitterVisitorContext {
    buffer: String,
}

impl EmitterVisitorContext {
    pub fn create_root() -> Self {
        EmitterVisitorContext::with_capacity(DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EmitterVisitorContext {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn print(&mut self, part: &str) {
        self.buffer.push_str(part);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn to_source(&self) -> String {
        self.buffer.clone()
    }

    pub fn into_source(self) -> String {
        self.buffer
    }
}

/// Quotes `input` as a single-quoted script string.
pub fn escape_string_literal(input: &str) -> String {
    let mut escaped = input.replace('\\', "\\\\");
    escaped = escaped.replace('\'', "\\'");
    escaped = escaped.replace('\n', "\\n");
    escaped = escaped.replace('\r', "\\r");
    escaped = escaped.replace('\u{2028}', "\\u2028");
    escaped = escaped.replace('\u{2029}', "\\u2029");
    format!("'{}'", escaped)
}

/// Writes nodes into an [`EmitterVisitorContext`].
pub struct AbstractEmitterVisitor {
    serializer: JsonSerializer,
}

impl Default for AbstractEmitterVisitor {
    fn default() -> Self {
        AbstractEmitterVisitor::new(JsonSerializer::new())
    }
}

impl AbstractEmitterVisitor {
    pub fn new(serializer: JsonSerializer) -> Self {
        AbstractEmitterVisitor { serializer }
    }

    /// Renders each item in order with `delimiter` between consecutive items.
    pub fn visit_and_join<T: JsNode>(
        &mut self,
        items: &[T],
        delimiter: &str,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                ctx.print(delimiter);
            }
            item.accept(self, ctx)?;
        }
        Ok(())
    }

    fn visit_params_and_body(
        &mut self,
        function: &o::FunctionExpr,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        ctx.print("(");
        self.visit_and_join(&function.params, ",", ctx)?;
        ctx.print("){");
        function.body.visit_statement(self, ctx)?;
        ctx.print("}");
        Ok(())
    }

    fn print_template_value(&mut self, value: &Value, ctx: &mut EmitterVisitorContext) -> Result<()> {
        match value {
            Value::String(text) => {
                ctx.print(text);
                Ok(())
            }
            other => self.serializer.serialize_into(other, ctx),
        }
    }
}

impl o::ExpressionVisitor<EmitterVisitorContext> for AbstractEmitterVisitor {
    fn visit_identifier(&mut self, expr: &o::Identifier, ctx: &mut EmitterVisitorContext) -> Result<()> {
        ctx.print(expr.name());
        Ok(())
    }

    fn visit_literal(&mut self, expr: &o::Literal, ctx: &mut EmitterVisitorContext) -> Result<()> {
        match expr {
            o::Literal::Number(n) => ctx.print(&n.to_string()),
            o::Literal::Boolean(b) => ctx.print(if *b { "true" } else { "false" }),
            o::Literal::String(s) => ctx.print(&escape_string_literal(s)),
            o::Literal::Null => ctx.print("null"),
            o::Literal::Array(items) => self.serializer.serialize_array_into(items, ctx)?,
            o::Literal::Object(value) => self.serializer.serialize_into(value, ctx)?,
        }
        Ok(())
    }

    fn visit_raw_expr(&mut self, expr: &o::RawExpr, ctx: &mut EmitterVisitorContext) -> Result<()> {
        ctx.print(&expr.code);
        Ok(())
    }

    fn visit_template_expr(
        &mut self,
        expr: &o::TemplateExpr,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        for part in parse_template(&expr.template) {
            match part {
                TemplatePart::Text(text) => ctx.print(text),
                TemplatePart::Variable(name) => {
                    let value = expr
                        .variables
                        .get(name)
                        .ok_or_else(|| CompilerError::unresolved_variable(name))?;
                    self.print_template_value(value, ctx)?;
                }
            }
        }
        Ok(())
    }

    fn visit_call_expr(&mut self, expr: &o::CallExpr, ctx: &mut EmitterVisitorContext) -> Result<()> {
        expr.callee.visit_expression(self, ctx)?;
        ctx.print("(");
        self.visit_and_join(&expr.args, ",", ctx)?;
        ctx.print(")");
        Ok(())
    }

    fn visit_call_chain_expr(
        &mut self,
        expr: &o::CallChainExpr,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        self.visit_and_join(&expr.links, ".", ctx)
    }

    fn visit_assignment_expr(
        &mut self,
        expr: &o::AssignmentExpr,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        expr.left.visit_expression(self, ctx)?;
        ctx.print(" = ");
        expr.right.visit_expression(self, ctx)
    }

    fn visit_function_expr(
        &mut self,
        expr: &o::FunctionExpr,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        ctx.print("function");
        self.visit_params_and_body(expr, ctx)
    }

    fn visit_named_function_expr(
        &mut self,
        expr: &o::NamedFunctionExpr,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        ctx.print("function ");
        ctx.print(expr.name.name());
        self.visit_params_and_body(&expr.function, ctx)
    }
}

impl o::StatementVisitor<EmitterVisitorContext> for AbstractEmitterVisitor {
    fn visit_raw_stmt(&mut self, stmt: &o::RawStmt, ctx: &mut EmitterVisitorContext) -> Result<()> {
        ctx.print(&stmt.code);
        ctx.print(";");
        Ok(())
    }

    fn visit_expression_stmt(
        &mut self,
        stmt: &o::ExpressionStatement,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        stmt.expr.visit_expression(self, ctx)?;
        ctx.print(";");
        Ok(())
    }

    fn visit_statement_sequence(
        &mut self,
        stmt: &o::StatementSequence,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        self.visit_and_join(&stmt.statements, "", ctx)
    }

    fn visit_if_stmt(&mut self, stmt: &o::IfStmt, ctx: &mut EmitterVisitorContext) -> Result<()> {
        ctx.print("if(");
        if stmt.negated {
            ctx.print("!(");
            stmt.condition.visit_expression(self, ctx)?;
            ctx.print(")");
        } else {
            stmt.condition.visit_expression(self, ctx)?;
        }
        ctx.print("){");
        stmt.true_case.visit_statement(self, ctx)?;
        ctx.print("}");
        if let Some(false_case) = &stmt.false_case {
            ctx.print("else{");
            false_case.visit_statement(self, ctx)?;
            ctx.print("}");
        }
        Ok(())
    }

    fn visit_declare_var_stmt(
        &mut self,
        stmt: &o::DeclareVarStmt,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        ctx.print("var ");
        ctx.print(stmt.name.name());
        if let Some(value) = &stmt.value {
            ctx.print(" = ");
            value.visit_expression(self, ctx)?;
        }
        ctx.print(";");
        Ok(())
    }

    fn visit_return_stmt(
        &mut self,
        stmt: &o::ReturnStatement,
        ctx: &mut EmitterVisitorContext,
    ) -> Result<()> {
        ctx.print("return");
        if let Some(value) = &stmt.value {
            ctx.print(" ");
            value.visit_expression(self, ctx)?;
        }
        ctx.print(";");
        Ok(())
    }
}
