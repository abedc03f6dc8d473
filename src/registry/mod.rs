//! Model Registry
//!
//! Static mapping from model id to display name, tier and generation
//! defaults. The set is fixed at compile time; lookups are pure.

pub mod entry;

pub use entry::{ModelDescriptor, ModelSummary, Tier};

use crate::error::RelayError;
use crate::router::AdapterKind;

/// Look up a model by id.
pub fn resolve(id: &str) -> Result<&'static ModelDescriptor, RelayError> {
    entry::MODELS
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| RelayError::UnknownModel(id.to_string()))
}

/// All models in product order (free tier first).
pub fn list_available() -> &'static [ModelDescriptor] {
    entry::MODELS
}

/// Model used when the caller names none: the first streaming-completions entry.
pub fn default_model() -> &'static ModelDescriptor {
    entry::MODELS
        .iter()
        .find(|d| AdapterKind::for_model(d.id) == AdapterKind::Groq)
        .unwrap_or(&entry::MODELS[0])
}
