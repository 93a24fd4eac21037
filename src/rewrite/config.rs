//! Configuration for a rewrite run

use crate::scan::DEFAULT_EXCLUDED_DIRS;
use crate::style::StyleDefaults;

/// Which literal every matching field should end up holding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// Rewrite toward the managed-identity literal (`"Msi"`)
    ToMsi,
    /// Rewrite toward the credential literal (`"ConnectionString"`)
    ToConnectionString,
}

impl ConversionDirection {
    /// The literal written into every matching field
    pub fn target(&self) -> &'static str {
        match self {
            ConversionDirection::ToMsi => "Msi",
            ConversionDirection::ToConnectionString => "ConnectionString",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            ConversionDirection::ToMsi => ConversionDirection::ToConnectionString,
            ConversionDirection::ToConnectionString => ConversionDirection::ToMsi,
        }
    }
}

/// Rewriter configuration
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Object key to rewrite, matched exactly and case-sensitively
    pub field_name: String,
    /// Directory names pruned during discovery
    pub excluded_dirs: Vec<String>,
    /// Style fallback for documents carrying no formatting signal
    pub style_defaults: StyleDefaults,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            field_name: "AuthenticationMode".to_string(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            style_defaults: StyleDefaults::default(),
        }
    }
}

impl RewriteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the exclusion list with additional directory names
    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }
}
