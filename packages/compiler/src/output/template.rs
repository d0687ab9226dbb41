//! Template Placeholders
//!
//! Splits template text into literal runs and `${name}` placeholders.
//! `$${` is an escape for a literal `${`.

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\$\{|\$\{([^}]*)\}").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    Text(&'a str),
    Variable(&'a str),
}

pub fn parse_template(template: &str) -> Vec<TemplatePart<'_>> {
    let mut parts = Vec::new();
    let mut last = 0;
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            parts.push(TemplatePart::Text(&template[last..whole.start()]));
        }
        match caps.get(1) {
            Some(name) => parts.push(TemplatePart::Variable(name.as_str().trim())),
            None => parts.push(TemplatePart::Text("${")),
        }
        last = whole.end();
    }
    if last < template.len() {
        parts.push(TemplatePart::Text(&template[last..]));
    }
    parts
}
