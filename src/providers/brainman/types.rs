//! Brainman wire types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct BrainmanRequest<'a> {
    pub message: &'a str,
}

/// Either field may be absent; both are checked by the adapter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrainmanResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_a_bare_message() {
        let json = serde_json::to_value(BrainmanRequest { message: "hi" }).unwrap();
        assert_eq!(json, serde_json::json!({"message": "hi"}));
    }

    #[test]
    fn empty_object_parses_with_nothing_set() {
        let resp: BrainmanResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer.is_none());
        assert!(resp.error.is_none());
    }
}
