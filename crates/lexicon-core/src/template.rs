//! Brace-style placeholder substitution.
//!
//! Templates use `{name}` placeholders with `{{` and `}}` as literal braces.
//! Formatting is all-or-nothing: [`format_template`] returns `None` as soon as
//! anything cannot be substituted, and the caller keeps the raw template.

use std::collections::BTreeMap;

/// Substitutes `{name}` placeholders in `template` from `values`.
///
/// A format spec or conversion after the name (`{count:>3}`, `{name!r}`) is
/// accepted and ignored. Returns `None` for an unknown or empty placeholder
/// name, an unclosed `{`, or a lone `}`.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use lexicon_core::format_template;
///
/// let values = BTreeMap::from([(String::from("name"), String::from("Ann"))]);
/// assert_eq!(format_template("Hi {name}", &values).as_deref(), Some("Hi Ann"));
/// assert_eq!(format_template("Hi {nobody}", &values), None);
/// ```
#[must_use]
pub fn format_template(template: &str, values: &BTreeMap<String, String>) -> Option<String> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let mut field = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    field.push(c);
                }
                if !closed {
                    return None;
                }
                output.push_str(values.get(field_name(&field)?)?);
            }
            '}' => return None,
            other => output.push(other),
        }
    }

    Some(output)
}

/// Strips any `!conversion` or `:spec` suffix; empty names are positional.
fn field_name(field: &str) -> Option<&str> {
    let end = field.find(['!', ':']).unwrap_or(field.len());
    field.get(..end).filter(|name| !name.is_empty())
}
