use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Open, caller-supplied metadata. Opaque to this crate; renderers read it.
pub type Attributes = HashMap<String, serde_json::Value>;

/// A resolved vocabulary entry from an external dictionary. Opaque here:
/// the tree stores it without inspecting its structure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DictionaryItem(pub serde_json::Value);

impl DictionaryItem {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        DictionaryItem(value.into())
    }
}

/// A deferred random-selection generator: zero arguments, yields a
/// dictionary item when a renderer invokes it. Construction never calls it.
#[derive(Clone)]
pub struct RandomItemGetter(Arc<dyn Fn() -> DictionaryItem + Send + Sync>);

impl RandomItemGetter {
    pub fn new(f: impl Fn() -> DictionaryItem + Send + Sync + 'static) -> Self {
        RandomItemGetter(Arc::new(f))
    }

    /// For renderers. The builder stores getters without invoking them so
    /// the same template can be rendered repeatedly with fresh outcomes.
    pub fn invoke(&self) -> DictionaryItem {
        (self.0)()
    }
}

impl fmt::Debug for RandomItemGetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RandomItemGetter")
    }
}

// Handle identity; two getters compare equal only if they share the closure.
impl PartialEq for RandomItemGetter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
