//! Typed errors for the rendering core.
//!
//! Both variants are contained at the render boundary: `render` converts them
//! into a diagnostic page instead of propagating them, so every request gets a
//! response string back even under total rendering failure.

use std::path::PathBuf;

use thiserror::Error;

/// A fault raised while rendering a page template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template source could not be read (missing file, permission
    /// denial, or invalid encoding).
    #[error("failed to load template '{path}'", path = .path.display())]
    Load {
        /// Path of the unreadable template source.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The page's customization hook returned an error.
    #[error("customization hook failed for page '{page}'")]
    Hook {
        /// Identifier of the page whose hook failed.
        page: String,
        #[source]
        source: anyhow::Error,
    },
}

impl TemplateError {
    /// Name of the component the fault originated in.
    pub fn origin(&self) -> &'static str {
        match self {
            TemplateError::Load { .. } => "template loader",
            TemplateError::Hook { .. } => "customization hook",
        }
    }
}
