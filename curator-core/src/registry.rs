//! Model lifecycle registry.
//!
//! The service layer owns a [`ModelRegistry`] and starts it before serving
//! requests. No model is genuinely loaded by the heuristic scorers; the
//! registry records placeholder entries so a model-backed scorer can later
//! receive a real capability handle without the pipelines changing shape.

use std::collections::BTreeSet;

/// Placeholder model names registered on startup.
const PLACEHOLDER_MODELS: [&str; 2] = ["llama", "sentence_transformer"];

/// Tracks which scoring models are loaded.
///
/// # Examples
/// ```
/// use curator_core::ModelRegistry;
///
/// let mut registry = ModelRegistry::new();
/// assert!(!registry.is_ready());
/// registry.start();
/// assert!(registry.contains("llama"));
/// registry.stop();
/// assert!(!registry.is_ready());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRegistry {
    models: BTreeSet<String>,
}

impl ModelRegistry {
    /// Construct a registry with no models loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the placeholder models as loaded.
    pub fn start(&mut self) {
        for name in PLACEHOLDER_MODELS {
            self.models.insert(name.to_owned());
        }
        log::info!("model registry started with {} models", self.models.len());
    }

    /// Unload all models.
    pub fn stop(&mut self) {
        self.models.clear();
        log::info!("model registry stopped");
    }

    /// Report whether any model is loaded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.models.is_empty()
    }

    /// Report whether a named model is loaded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains(name)
    }

    /// Iterate over the loaded model names in lexical order.
    pub fn models(&self) -> impl Iterator<Item = &str> + '_ {
        self.models.iter().map(String::as_str)
    }
}
