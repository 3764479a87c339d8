//! Named parameter handling.
//!
//! Placeholders take the form `:name` where `name` is `[A-Za-z_][A-Za-z0-9_]*`.
//! Text inside single-quoted literals and PostgreSQL `::type` casts are never
//! treated as placeholders.

use serde_json::Value;

/// Replace every bound `:name` placeholder with the literal form of its value.
///
/// Placeholders without a binding are left untouched.
pub fn inline_parameters(sql: &str, params: &[(String, Value)]) -> String {
    rewrite_placeholders(sql, |name| {
        params
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| format_value(value))
    })
}

/// Names of all placeholders in `sql`, in order of appearance
pub fn placeholder_names(sql: &str) -> Vec<String> {
    let mut names = Vec::new();
    rewrite_placeholders(sql, |name| {
        names.push(name.to_string());
        None
    });
    names
}

fn rewrite_placeholders<F>(sql: &str, mut replace: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let chars: Vec<char> = sql.chars().collect();
    let mut out = String::with_capacity(sql.len());
    let mut in_quote = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            in_quote = !in_quote;
            out.push(c);
            i += 1;
            continue;
        }

        if in_quote || c != ':' {
            out.push(c);
            i += 1;
            continue;
        }

        // `::` cast
        if chars.get(i + 1) == Some(&':') {
            out.push_str("::");
            i += 2;
            while i < chars.len() && is_ident_char(chars[i]) {
                out.push(chars[i]);
                i += 1;
            }
            continue;
        }

        match chars.get(i + 1) {
            Some(&next) if next.is_ascii_alphabetic() || next == '_' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_ident_char(chars[end]) {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                match replace(&name) {
                    Some(literal) => out.push_str(&literal),
                    None => {
                        out.push(':');
                        out.push_str(&name);
                    }
                }
                i = end;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Format a JSON value as an SQL literal
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s.replace('\'', "''")),
        _ => format!("'{}'", value.to_string().replace('\'', "''")),
    }
}
