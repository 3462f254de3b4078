//! Row encoding for the delimited roster format

use std::borrow::Cow;

/// Field delimiter
pub const DELIMITER: char = ',';

/// Check if a field must be quoted to survive a decode unchanged
fn needs_quoting(field: &str) -> bool {
    field.contains([DELIMITER, '"', '\r', '\n'])
        || field.starts_with(char::is_whitespace)
        || field.ends_with(char::is_whitespace)
}

/// Encode one field, quoting only when required
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if !needs_quoting(field) {
        return Cow::Borrowed(field);
    }
    let mut result = String::with_capacity(field.len() + 2);
    result.push('"');
    for c in field.chars() {
        if c == '"' {
            result.push('"');
        }
        result.push(c);
    }
    result.push('"');
    Cow::Owned(result)
}

/// Encode a row without its line terminator
pub fn encode_row(fields: &[&str]) -> String {
    let encoded: Vec<Cow<'_, str>> = fields.iter().map(|f| encode_field(f)).collect();
    encoded.join(",")
}
