//! Style-preserving JSON serialization
//!
//! `serde_json::to_string_pretty` imposes its own conventions (2 spaces,
//! LF); this writer instead reproduces whatever [`StyleDescriptor`] the
//! detector inferred from the original file, so a rewrite only touches the
//! bytes the mutation actually changed.

use crate::error::{RewriteError, RewriteResult};
use crate::style::StyleDescriptor;
use serde_json::Value;

/// Serialize `value` reproducing the document's original layout.
///
/// Flat documents come back as compact single-line JSON. Indented
/// documents get exactly `depth x indent-unit` of leading whitespace per
/// line and the descriptor's line terminator, with a trailing terminator
/// iff the original ended with one.
pub fn serialize_with_style(value: &Value, style: &StyleDescriptor) -> RewriteResult<String> {
    let mut out = String::new();

    if style.indent.is_flat() {
        out.push_str(&scalar(value)?);
    } else {
        write_value(value, style, 0, &mut out)?;
        if style.trailing_newline {
            out.push_str(style.line_ending.as_str());
        }
    }

    Ok(out)
}

fn write_value(
    value: &Value,
    style: &StyleDescriptor,
    depth: usize,
    out: &mut String,
) -> RewriteResult<()> {
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push('{');
            for (i, (key, entry)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline_indent(style, depth + 1, out);
                out.push_str(&scalar(&Value::String(key.clone()))?);
                out.push_str(": ");
                write_value(entry, style, depth + 1, out)?;
            }
            newline_indent(style, depth, out);
            out.push('}');
        }
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                newline_indent(style, depth + 1, out);
                write_value(item, style, depth + 1, out)?;
            }
            newline_indent(style, depth, out);
            out.push(']');
        }
        // Empty containers and scalars render the same in every style
        other => out.push_str(&scalar(other)?),
    }

    Ok(())
}

fn newline_indent(style: &StyleDescriptor, depth: usize, out: &mut String) {
    out.push_str(style.line_ending.as_str());
    for _ in 0..depth {
        out.push_str(style.indent.as_str());
    }
}

/// Render a leaf (or empty container) through serde_json so string
/// escaping and number formatting stay canonical.
fn scalar(value: &Value) -> RewriteResult<String> {
    serde_json::to_string(value).map_err(|e| RewriteError::Serialize {
        message: e.to_string(),
    })
}
