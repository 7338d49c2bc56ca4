//! Page dispatch registry and session context.
//!
//! The registry is the dispatch table mapping page-identifier strings to
//! render functions. It is an explicitly owned object rather than process
//! global state: the serving layer constructs one, renderers register into
//! it, and tests build isolated registries per case.
//!
//! Registration is a setup-time step; the registry imposes no locking
//! discipline of its own. Handlers are `Send + Sync`, so a serving layer
//! that dispatches concurrently can share the registry behind whatever
//! synchronization it already uses for routing.

use std::collections::HashMap;

/// Opaque per-request context handed through to customization hooks.
///
/// The rendering core never inspects the contents; it is a string key/value
/// bag the serving layer populates from the request or session and hooks
/// read as they see fit.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    values: HashMap<String, String>,
}

impl SessionContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// A registered render function: takes the request's session context and
/// always produces a response string.
pub type RenderFn = Box<dyn Fn(&SessionContext) -> String + Send + Sync>;

/// Dispatch table from page identifier to render function.
#[derive(Default)]
pub struct PageRegistry {
    routes: HashMap<String, RenderFn>,
}

impl PageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, overwriting any existing handler for `identifier`.
    ///
    /// Last registration wins; collisions are not an error.
    pub fn add_route<F>(&mut self, identifier: impl Into<String>, handler: F)
    where
        F: Fn(&SessionContext) -> String + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        tracing::debug!(page = %identifier, "registering page route");
        self.routes.insert(identifier, Box::new(handler));
    }

    /// Look up the handler registered under `identifier`.
    pub fn handler(&self, identifier: &str) -> Option<&RenderFn> {
        self.routes.get(identifier)
    }

    /// Invoke the handler for `identifier`, or `None` if no route matches.
    pub fn dispatch(&self, identifier: &str, session: &SessionContext) -> Option<String> {
        match self.routes.get(identifier) {
            Some(handler) => Some(handler(session)),
            None => {
                tracing::debug!(page = %identifier, "no route registered");
                None
            }
        }
    }

    /// Identifiers of all registered routes, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry").field("routes", &self.routes.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_invokes_registered_handler() {
        let mut registry = PageRegistry::new();
        registry.add_route("home", |_: &SessionContext| "welcome".to_string());

        let session = SessionContext::new();
        assert_eq!(registry.dispatch("home", &session), Some("welcome".to_string()));
    }

    #[test]
    fn unknown_identifier_dispatches_to_none() {
        let registry = PageRegistry::new();
        assert_eq!(registry.dispatch("missing", &SessionContext::new()), None);
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = PageRegistry::new();
        registry.add_route("page", |_: &SessionContext| "first".to_string());
        registry.add_route("page", |_: &SessionContext| "second".to_string());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.routes().collect::<Vec<_>>(), vec!["page"]);
        assert_eq!(
            registry.dispatch("page", &SessionContext::new()),
            Some("second".to_string())
        );
    }

    #[test]
    fn handler_reads_session_context() {
        let mut registry = PageRegistry::new();
        registry.add_route("greet", |session: &SessionContext| {
            format!("hi {}", session.get("user").unwrap_or("stranger"))
        });

        let mut session = SessionContext::new();
        session.insert("user", "ada");
        assert_eq!(registry.dispatch("greet", &session), Some("hi ada".to_string()));

        assert_eq!(
            registry.dispatch("greet", &SessionContext::new()),
            Some("hi stranger".to_string())
        );
    }
}
