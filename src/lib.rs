//! pagekit - file-backed page template rendering with fault containment
//!
//! A small rendering core for text/markup pages: each logical page binds a
//! template file to a pluggable customization hook, and every render is
//! guaranteed to produce a displayable string, degrading to a diagnostic page
//! when loading or customization fails rather than surfacing an error to the
//! serving layer.
//!
//! # Architecture Overview
//!
//! - Templates are plain text files containing zero or more placeholder
//!   markers of the form `<? 'key' >`
//! - A [`templating::TemplateRenderer`] loads its template fresh on every
//!   render, so edits to the file show up without re-registration
//! - Customization is a capability trait ([`templating::PageHook`]),
//!   satisfied by any matching closure, not an inheritance hierarchy
//! - The dispatch table ([`registry::PageRegistry`]) is an explicitly owned
//!   object the serving layer constructs and passes around, so tests build
//!   isolated registries per case
//!
//! # Core Modules
//!
//! - [`templating`] - Template loading, the customization hook contract, and
//!   placeholder substitution
//! - [`registry`] - Page dispatch table and the opaque per-request session
//!   context
//! - [`compress`] - Whole-buffer gzip helpers for response payloads
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
//! // The serving layer dispatches per request; render never fails.
//! let mut session = SessionContext::new();
//! session.insert("name", "World");
//! assert!(registry.dispatch("greeting", &session).is_some());
//! ```

pub mod compress;
pub mod registry;
pub mod templating;
