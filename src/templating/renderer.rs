//! File-backed template rendering with fault containment.
//!
//! A [`TemplateRenderer`] binds a template source path to a page-specific
//! customization hook. Each render loads the template text fresh from disk,
//! hands it to the hook together with the request's session context, and
//! returns the rewritten body.
//!
//! Fault containment is centralized at the render boundary: load failures and
//! hook failures alike degrade to a diagnostic page instead of propagating,
//! so every page type gets crash-proof rendering for free and individual
//! hooks never need to handle their own I/O faults.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use super::error::TemplateError;
use crate::registry::{PageRegistry, SessionContext};

/// Page-specific customization step run against the loaded template body.
///
/// This is the rendering core's sole extension point: each page supplies an
/// implementation that inspects the session context and rewrites the body in
/// place, typically through repeated [`place_value`](super::place_value)
/// calls, though a hook may append or replace arbitrary content.
///
/// Any closure with the matching signature is a hook, so pages are usually
/// plain function values rather than dedicated types:
///
/// ```rust
/// use pagekit::templating::{PageHook, place_value};
/// use pagekit::registry::SessionContext;
///
/// fn greeting(session: &SessionContext, body: &mut String) -> anyhow::Result<()> {
///     let name = session.get("name").unwrap_or("stranger");
///     *body = place_value("name", name, body);
///     Ok(())
/// }
///
/// let _hook: &dyn PageHook = &greeting;
/// ```
pub trait PageHook: Send + Sync {
    /// Rewrite `body` for this request. Errors are contained by the caller.
    fn customize(&self, session: &SessionContext, body: &mut String) -> Result<()>;
}

impl<F> PageHook for F
where
    F: Fn(&SessionContext, &mut String) -> Result<()> + Send + Sync,
{
    fn customize(&self, session: &SessionContext, body: &mut String) -> Result<()> {
        self(session, body)
    }
}

/// Renderer for one logical page, backed by a template file on disk.
///
/// The source path is fixed at construction and never mutated. The renderer
/// holds no other state, so clones are cheap (the hook is shared behind an
/// [`Arc`]) and concurrent renders are independent: each invocation reads the
/// template into its own request-local buffer.
#[derive(Clone)]
pub struct TemplateRenderer {
    source_path: PathBuf,
    hook: Arc<dyn PageHook>,
}

impl TemplateRenderer {
    /// Create a renderer for the template at `source_path` with the given
    /// customization hook.
    pub fn new(source_path: impl Into<PathBuf>, hook: impl PageHook + 'static) -> Self {
        Self {
            source_path: source_path.into(),
            hook: Arc::new(hook),
        }
    }

    /// Path of the template source this renderer loads.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Register this renderer's render function into `registry`.
    ///
    /// The route identifier is `alias`, or the display form of the source
    /// path when `alias` is absent or empty. Registering the same identifier
    /// again overwrites; registering a second alias adds another route over
    /// the same renderer.
    pub fn register(&self, registry: &mut PageRegistry, alias: Option<&str>) {
        let identifier = match alias {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => self.source_path.display().to_string(),
        };
        let renderer = self.clone();
        registry.add_route(identifier, move |session: &SessionContext| renderer.render(session));
    }

    /// Render the page for one request. Never fails.
    ///
    /// Loads the template text, runs the customization hook, and returns the
    /// resulting body. Any fault along the way is caught here and converted
    /// into a diagnostic page embedding the fault's message and origin, so
    /// the caller always receives a displayable string.
    pub fn render(&self, session: &SessionContext) -> String {
        tracing::debug!(template = %self.source_path.display(), "rendering page");
        match self.try_render(session) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(
                    template = %self.source_path.display(),
                    origin = err.origin(),
                    error = %err,
                    "page rendering failed",
                );
                diagnostic_page(&err, &self.source_path)
            }
        }
    }

    fn try_render(&self, session: &SessionContext) -> Result<String, TemplateError> {
        let mut body =
            fs::read_to_string(&self.source_path).map_err(|source| TemplateError::Load {
                path: self.source_path.clone(),
                source,
            })?;

        self.hook
            .customize(session, &mut body)
            .map_err(|source| TemplateError::Hook {
                page: self.source_path.display().to_string(),
                source,
            })?;

        Ok(body)
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer").field("source_path", &self.source_path).finish()
    }
}

/// Build the fallback page shown when rendering faults.
///
/// Embeds the fault's message, originating component, and the template path
/// the invocation was rendering, with newlines converted to `<br />` so the
/// text stays legible in a markup consumer.
fn diagnostic_page(err: &TemplateError, source_path: &Path) -> String {
    let mut detail = err.to_string();
    let mut cause: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(err);
    while let Some(err) = cause {
        let _ = write!(detail, "\ncaused by: {err}");
        cause = err.source();
    }

    format!(
        "<html><body><h1>Page rendering error</h1>\
         <p>error in {origin} while rendering '{path}'</p><p>{detail}</p></body></html>",
        origin = err.origin(),
        path = source_path.display(),
        detail = detail.replace('\n', "<br />"),
    )
}
