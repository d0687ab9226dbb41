//! Renders a list of nodes separated by a delimiter.

use crate::config::CompilerConfig;
use crate::error::Result;
use crate::output::abstract_emitter::{AbstractEmitterVisitor, EmitterVisitorContext};
use crate::output::json_serializer::JsonSerializer;
use crate::output::output_ast::JsNode;
use once_cell::unsync::OnceCell;
use tracing::{debug, trace};

pub struct JsJoiner<'a, T: JsNode> {
    items: Option<&'a [T]>,
    delimiter: &'a str,
    initial_capacity: usize,
    serializer: JsonSerializer,
    compiled: OnceCell<String>,
}

impl<'a, T: JsNode> JsJoiner<'a, T> {
    /// An absent list joins to empty text.
    pub fn new(items: Option<&'a [T]>, delimiter: &'a str) -> Self {
        JsJoiner::with_config(items, delimiter, &CompilerConfig::default())
    }

    pub fn of(items: &'a [T], delimiter: &'a str) -> Self {
        JsJoiner::new(Some(items), delimiter)
    }

    pub fn with_config(items: Option<&'a [T]>, delimiter: &'a str, config: &CompilerConfig) -> Self {
        JsJoiner {
            items,
            delimiter,
            initial_capacity: config.initial_capacity,
            serializer: JsonSerializer::with_config(config),
            compiled: OnceCell::new(),
        }
    }

    pub fn generate(&self) -> Result<&str> {
        if let Some(js) = self.compiled.get() {
            trace!(len = js.len(), "returning memoized join");
            return Ok(js);
        }
        let js = self.compiled.get_or_try_init(|| self.compile())?;
        Ok(js)
    }

    fn compile(&self) -> Result<String> {
        let items = match self.items {
            Some(items) if !items.is_empty() => items,
            _ => return Ok(String::new()),
        };
        let mut ctx = EmitterVisitorContext::with_capacity(self.initial_capacity);
        let mut visitor = AbstractEmitterVisitor::new(self.serializer.clone());
        visitor.visit_and_join(items, self.delimiter, &mut ctx)?;
        let js = ctx.into_source();
        debug!(items = items.len(), len = js.len(), "joined scripts");
        Ok(js)
    }
}

/// Joins `items` with a throwaway joiner.
pub fn join<T: JsNode>(items: &[T], delimiter: &str) -> Result<String> {
    JsJoiner::of(items, delimiter).generate().map(str::to_string)
}
