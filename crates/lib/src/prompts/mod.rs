//! # Prompt Template Modules
//!
//! This module holds the prompt templates used by the generation pipeline and the
//! small rendering helper they share.

pub mod education;

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so free text that happens to contain a
/// placeholder name is copied through unchanged. Unknown placeholders are left as-is.
pub fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];
        let substitution = values.iter().find_map(|(name, value)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(name))
                .and_then(|t| t.strip_prefix('}'))
                .map(|remaining| (*value, remaining))
        });
        match substitution {
            Some((value, remaining)) => {
                rendered.push_str(value);
                rest = remaining;
            }
            None => {
                rendered.push('{');
                rest = &tail[1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}
