//! Registry entries
//!
//! The fixed model table. Order reflects product priority (free tier first)
//! and is the order `list_available` reports.

use serde::{Deserialize, Serialize};

use crate::types::GenerationConfig;

/// Commercial tier of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

/// Static description of one supported model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub tier: Tier,
    pub defaults: GenerationConfig,
}

/// Serializable view used by `GET /models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub id: String,
    pub display_name: String,
    pub tier: Tier,
}

impl From<&ModelDescriptor> for ModelSummary {
    fn from(d: &ModelDescriptor) -> Self {
        Self {
            id: d.id.to_string(),
            display_name: d.display_name.to_string(),
            tier: d.tier,
        }
    }
}

pub(crate) const MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "chatgpt-4o",
        display_name: "ChatGPT-4o",
        tier: Tier::Free,
        defaults: GenerationConfig::sampling(0.7, 1024, 1.0, None),
    },
    ModelDescriptor {
        id: "web-chat",
        display_name: "Web Chat",
        tier: Tier::Free,
        defaults: GenerationConfig::sampling(0.7, 1024, 1.0, None),
    },
    ModelDescriptor {
        id: "llama-3.3-70b-versatile",
        display_name: "Llama 3.3",
        tier: Tier::Premium,
        defaults: GenerationConfig::sampling(0.7, 1024, 1.0, None),
    },
    ModelDescriptor {
        id: "deepseek-r1-distill-llama-70b",
        display_name: "DeepSeek R1",
        tier: Tier::Premium,
        defaults: GenerationConfig::sampling(0.6, 4096, 0.95, None),
    },
    ModelDescriptor {
        id: "gemma2-9b-it",
        display_name: "Gemma 2 9B",
        tier: Tier::Premium,
        defaults: GenerationConfig::sampling(1.0, 1024, 1.0, None),
    },
    ModelDescriptor {
        id: "gemini-1.5-flash",
        display_name: "Gemini 1.5 Flash",
        tier: Tier::Premium,
        defaults: GenerationConfig::sampling(0.7, 2048, 1.0, None),
    },
    ModelDescriptor {
        id: "gemini-2.0-flash-exp",
        display_name: "Gemini 2.0 Flash",
        tier: Tier::Premium,
        defaults: GenerationConfig::sampling(1.0, 8192, 0.95, Some(40)),
    },
    // Listed for the UI; the generation endpoint table has no URL for it yet.
    ModelDescriptor {
        id: "gemini-2.0-flash-thinking-exp-01-21",
        display_name: "Gemini 2.0 Flash Thinking",
        tier: Tier::Premium,
        defaults: GenerationConfig::sampling(1.0, 8192, 0.95, Some(40)),
    },
];
