use std::collections::BTreeMap;

use super::{Document, RenderContext, View, ViewError};
use crate::app::router::ViewKey;

/// Central registry of view renderers.
///
/// Owns all view instances and dispatches render requests by [`ViewKey`].
pub struct ViewRegistry {
    views: BTreeMap<ViewKey, Box<dyn View>>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: BTreeMap::new(),
        }
    }

    /// Register a view. Returns an error if its key is already taken.
    pub fn register(&mut self, view: Box<dyn View>) -> anyhow::Result<()> {
        let key = view.key();
        if self.views.contains_key(&key) {
            anyhow::bail!("View '{}' already registered", key);
        }
        self.views.insert(key, view);
        Ok(())
    }

    pub fn get(&self, key: ViewKey) -> Option<&dyn View> {
        self.views.get(&key).map(|v| v.as_ref())
    }

    /// Render the view registered under `key`.
    pub fn render(&self, key: ViewKey, ctx: &RenderContext) -> Result<Document, ViewError> {
        let view = self.get(key).ok_or(ViewError::NotRegistered(key))?;
        view.render(ctx)
    }

    pub fn keys(&self) -> impl Iterator<Item = ViewKey> + '_ {
        self.views.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
