#![deny(clippy::all)]

/**
 * JS Compiler
 *
 * Builds JavaScript expression and statement trees from typed nodes and host
 * values, and renders them to compact script text.
 */

mod config;
mod error;

pub mod output;

// Re-exports
pub use config::{CompilerConfig, DEFAULT_BUFFER_SIZE, DEFAULT_NULL_PLACEHOLDER};
pub use error::{CompilerError, Result};
pub use output::js_emitter::{render, JsGenerator, Visitable};
pub use output::js_joiner::{join, JsJoiner};
pub use output::json_serializer::JsonSerializer;
pub use output::output_ast::{
    AssignmentExpr, CallChainExpr, CallExpr, DeclareVarStmt, Expression, ExpressionStatement,
    FunctionExpr, Identifier, IfStmt, JavaScript, Literal, NamedFunctionExpr, RawExpr, RawStmt,
    ReturnStatement, Statement, StatementSequence, TemplateExpr,
};
pub use output::value::{Number, Value};
