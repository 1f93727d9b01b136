use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast;

use crate::app::config::HealthIdConfig;
use crate::app::router::Router;
use crate::app::session::SessionStore;
use crate::app::App;
use crate::auth::{IdentityResolver, ValidationPolicy};
use crate::forms::Drafts;
use crate::views::pages::create_default_registry;
use crate::views::registry::ViewRegistry;

/// Builder for constructing an [`App`] instance.
pub struct AppBuilder {
    config: HealthIdConfig,
    json: bool,
    router: Router,
    views: ViewRegistry,
    policy: Option<Box<dyn ValidationPolicy>>,
}

impl AppBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: HealthIdConfig) -> Self {
        Self {
            config,
            json: false,
            router: Router::new(),
            views: create_default_registry(),
            policy: None,
        }
    }

    /// Enable JSON output mode (NDJSON events).
    pub fn json_mode(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Replace the route table (overwriting the default).
    pub fn with_router(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    /// Replace the view registry (overwriting the defaults).
    pub fn with_views(mut self, views: ViewRegistry) -> Self {
        self.views = views;
        self
    }

    /// Install a login validation policy.
    pub fn with_policy(mut self, policy: Box<dyn ValidationPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the App.
    pub fn build(self) -> Result<App> {
        self.config.validate()?;

        let mut resolver = IdentityResolver::new(self.config.login.clone());
        if let Some(policy) = self.policy {
            resolver = resolver.with_policy(policy);
        }

        let (event_tx, _rx) = broadcast::channel(256);
        let language = self.config.app.language;

        Ok(App {
            config: Arc::new(self.config),
            json: self.json,
            session: SessionStore::new(),
            router: self.router,
            views: self.views,
            resolver,
            drafts: Drafts::new(language),
            current_view: None,
            event_tx,
        })
    }
}
