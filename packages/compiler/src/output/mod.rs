//! Output Module
//!
//! The script tree, value coercion, and rendering to JavaScript text.

pub mod abstract_emitter;
pub mod coercion;
pub mod js_emitter;
pub mod js_joiner;
pub mod json_serializer;
pub mod output_ast;
pub mod template;
pub mod value;
