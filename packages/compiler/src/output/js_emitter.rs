//! JavaScript Generator
//!
//! Renders a tree root to script text once and hands out the cached text
//! on every later call.

use crate::config::CompilerConfig;
use crate::error::Result;
use crate::output::abstract_emitter::{AbstractEmitterVisitor, EmitterVisitorContext};
use crate::output::json_serializer::JsonSerializer;
use crate::output::output_ast as o;
use once_cell::unsync::OnceCell;
use tracing::{debug, trace};

/// What a generator renders.
#[derive(Debug, Clone, Copy)]
pub enum Visitable<'a> {
    Expression(&'a o::Expression),
    Statement(&'a o::Statement),
    Script(&'a o::JavaScript),
    /// Rendered back-to-back; expressions get a terminator.
    Sequence(&'a [o::JavaScript]),
}

impl<'a> From<&'a o::Expression> for Visitable<'a> {
    fn from(expr: &'a o::Expression) -> Self {
        Visitable::Expression(expr)
    }
}

impl<'a> From<&'a o::Statement> for Visitable<'a> {
    fn from(stmt: &'a o::Statement) -> Self {
        Visitable::Statement(stmt)
    }
}

impl<'a> From<&'a o::JavaScript> for Visitable<'a> {
    fn from(script: &'a o::JavaScript) -> Self {
        Visitable::Script(script)
    }
}

impl<'a> From<&'a [o::JavaScript]> for Visitable<'a> {
    fn from(scripts: &'a [o::JavaScript]) -> Self {
        Visitable::Sequence(scripts)
    }
}

impl<'a> From<&'a Vec<o::JavaScript>> for Visitable<'a> {
    fn from(scripts: &'a Vec<o::JavaScript>) -> Self {
        Visitable::Sequence(scripts)
    }
}

pub struct JsGenerator<'a> {
    visitable: Visitable<'a>,
    initial_capacity: usize,
    serializer: JsonSerializer,
    compiled: OnceCell<String>,
}

impl<'a> JsGenerator<'a> {
    pub fn new(visitable: impl Into<Visitable<'a>>) -> Self {
        JsGenerator::with_config(visitable, &CompilerConfig::default())
    }

    pub fn with_config(visitable: impl Into<Visitable<'a>>, config: &CompilerConfig) -> Self {
        JsGenerator {
            visitable: visitable.into(),
            initial_capacity: config.initial_capacity,
            serializer: JsonSerializer::with_config(config),
            compiled: OnceCell::new(),
        }
    }

    /// Renders on first call; later calls return the same text.
    pub fn generate(&self) -> Result<&str> {
        if let Some(js) = self.compiled.get() {
            trace!(len = js.len(), "returning memoized script");
            return Ok(js);
        }
        let js = self.compiled.get_or_try_init(|| self.compile())?;
        Ok(js)
    }

    fn compile(&self) -> Result<String> {
        let mut ctx = EmitterVisitorContext::with_capacity(self.initial_capacity);
        let mut visitor = AbstractEmitterVisitor::new(self.serializer.clone());
        match self.visitable {
            Visitable::Expression(expr) => expr.visit_expression(&mut visitor, &mut ctx)?,
            Visitable::Statement(stmt) => stmt.visit_statement(&mut visitor, &mut ctx)?,
            Visitable::Script(script) => script.visit(&mut visitor, &mut ctx)?,
            Visitable::Sequence(scripts) => {
                for script in scripts {
                    script.visit(&mut visitor, &mut ctx)?;
                    if matches!(script, o::JavaScript::Expression(_)) {
                        ctx.print(";");
                    }
                }
            }
        }
        let js = ctx.into_source();
        debug!(len = js.len(), "rendered script");
        Ok(js)
    }
}

/// Renders a tree root with a throwaway generator.
pub fn render<'a>(visitable: impl Into<Visitable<'a>>) -> Result<String> {
    JsGenerator::new(visitable).generate().map(str::to_string)
}
