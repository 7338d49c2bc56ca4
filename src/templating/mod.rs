//! Page template loading, customization, and placeholder substitution.
//!
//! This module is the rendering core: a [`TemplateRenderer`] binds a template
//! file to a page-specific [`PageHook`], and [`place_value`] performs the
//! marker substitution hooks use to fill the body in.
//!
//! # Overview
//!
//! Templates are plain text files containing zero or more placeholder markers
//! of the form `<? 'key' >`. On each request the renderer:
//!
//! 1. Loads the full template text from its fixed source path.
//! 2. Invokes the page's customization hook with the session context and a
//!    mutable reference to the body; the hook typically calls [`place_value`]
//!    once per placeholder it wants to fill.
//! 3. Returns the rewritten body.
//!
//! Every fault raised during steps 1–2 is contained at the render boundary
//! and converted into a diagnostic page, so `render` always produces a
//! displayable string and never propagates an error to the serving layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagekit::registry::{PageRegistry, SessionContext};
//! use pagekit::templating::{TemplateRenderer, place_value};
//!
//! let renderer = TemplateRenderer::new(
//!     "pages/greeting.html",
//!     |session: &SessionContext, body: &mut String| -> anyhow::Result<()> {
//!         let name = session.get("name").unwrap_or("stranger");
//!         *body = place_value("name", name, body);
//!         Ok(())
//!     },
//! );
//!
//! let mut registry = PageRegistry::new();
//! renderer.register(&mut registry, Some("greeting"));
//!
//! let mut session = SessionContext::new();
//! session.insert("name", "World");
//! let page = registry.dispatch("greeting", &session);
//! ```

mod error;
mod renderer;
mod substitute;


pub use error::TemplateError;
pub use renderer::{PageHook, TemplateRenderer};
pub use substitute::place_value;
