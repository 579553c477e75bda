use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::animations::Animation;
use crate::foundation::error::{LoopreelError, LoopreelResult};

/// Key -> renderer mapping, co-indexed with the [`Catalog`](crate::Catalog).
#[derive(Clone, Default)]
pub struct Registry {
    order: Vec<String>,
    renderers: HashMap<String, Arc<dyn Animation>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer; a key may only be registered once.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        animation: Arc<dyn Animation>,
    ) -> LoopreelResult<()> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(LoopreelError::validation("renderer key must be non-empty"));
        }
        if self.renderers.contains_key(&key) {
            return Err(LoopreelError::validation(format!(
                "renderer '{key}' registered twice"
            )));
        }
        self.order.push(key.clone());
        self.renderers.insert(key, animation);
        Ok(())
    }

    /// Builder form of [`Registry::register`].
    pub fn with(
        mut self,
        key: impl Into<String>,
        animation: impl Animation + 'static,
    ) -> LoopreelResult<Self> {
        self.register(key, Arc::new(animation))?;
        Ok(self)
    }

    pub fn resolve(&self, key: &str) -> LoopreelResult<Arc<dyn Animation>> {
        self.renderers.get(key).cloned().ok_or_else(|| {
            LoopreelError::missing_renderer(format!("no renderer registered for '{key}'"))
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.renderers.contains_key(key)
    }

    /// Keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.order)
            .finish()
    }
}
