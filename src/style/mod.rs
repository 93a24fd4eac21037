//! Indentation and line-ending detection for JSON documents
//!
//! Rewriting a file must reproduce the layout a human (or their formatter)
//! gave it, so before any mutation the raw text is inspected once and the
//! result captured in a [`StyleDescriptor`].

/// Indentation unit used by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUnit {
    /// Single-line / minified document, no indentation to reproduce
    Flat,
    /// N literal space characters per nesting level
    Spaces(u8),
    /// One tab character per nesting level
    Tab,
}

impl IndentUnit {
    /// The string written once per nesting level
    pub fn as_str(&self) -> &'static str {
        const SPACES: &str = "                ";
        match self {
            IndentUnit::Flat => "",
            IndentUnit::Spaces(n) => &SPACES[..(*n as usize).min(SPACES.len())],
            IndentUnit::Tab => "\t",
        }
    }

    /// Whether re-serialization introduces newlines at all
    pub fn is_flat(&self) -> bool {
        matches!(self, IndentUnit::Flat)
    }
}

/// Line terminator convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Fallback style used when a document carries no signal of its own.
///
/// Passed explicitly into [`detect_style`] so callers (and tests) control
/// the fallback instead of relying on a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDefaults {
    pub indent: IndentUnit,
    pub line_ending: LineEnding,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            indent: IndentUnit::Spaces(2),
            line_ending: LineEnding::Lf,
        }
    }
}

/// Formatting metadata inferred from one document's raw text.
///
/// Derived once per file before mutation; immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub indent: IndentUnit,
    pub line_ending: LineEnding,
    /// Whether the original content ended with a line terminator
    pub trailing_newline: bool,
    /// Whether the original file carried a UTF-8 BOM (stripped before
    /// detection, re-emitted on write)
    pub bom: bool,
}

impl StyleDescriptor {
    /// Descriptor for content that was never on disk (defaults, no BOM)
    pub fn from_defaults(defaults: &StyleDefaults) -> Self {
        Self {
            indent: defaults.indent,
            line_ending: defaults.line_ending,
            trailing_newline: true,
            bom: false,
        }
    }
}

/// Infer the formatting convention of `content`.
///
/// Pure function, never fails: absence of signal degrades to `defaults`.
/// The indent classifier looks for the first indented line whose previous
/// non-blank line ends with an opening brace or bracket, so indentation
/// inside multi-line string values cannot be mistaken for layout.
pub fn detect_style(content: &str, defaults: &StyleDefaults) -> StyleDescriptor {
    StyleDescriptor {
        indent: detect_indent(content, defaults.indent),
        line_ending: detect_line_ending(content, defaults.line_ending),
        trailing_newline: content.ends_with('\n'),
        bom: false,
    }
}

fn detect_indent(content: &str, default: IndentUnit) -> IndentUnit {
    if !content.contains('\n') {
        return IndentUnit::Flat;
    }

    let mut prev_opens_scope = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let leading_len = line.len() - line.trim_start_matches(|c| c == ' ' || c == '\t').len();
        if prev_opens_scope && leading_len > 0 {
            if let Some(unit) = classify_leading(&line[..leading_len]) {
                return unit;
            }
        }
        prev_opens_scope = trimmed.ends_with('{') || trimmed.ends_with('[');
    }

    // Multi-line but no qualifying indented line: no signal, keep the
    // injected fallback rather than collapsing the file to one line.
    default
}

fn classify_leading(ws: &str) -> Option<IndentUnit> {
    let mut chars = ws.chars();
    match chars.next()? {
        '\t' => Some(IndentUnit::Tab),
        ' ' => {
            let spaces = 1 + chars.take_while(|&c| c == ' ').count();
            Some(IndentUnit::Spaces(spaces.min(16) as u8))
        }
        _ => None,
    }
}

fn detect_line_ending(content: &str, default: LineEnding) -> LineEnding {
    match content.find('\n') {
        Some(pos) if pos > 0 && content.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
        Some(_) => LineEnding::Lf,
        None => default,
    }
}
