//! Telemetry
//!
//! Structured logging for the relay: subscriber initialisation for the binary
//! and a small per-provider tracer used by the adapters.

pub mod subscriber;
pub mod tracer;

pub use subscriber::{OutputFormat, SubscriberConfig, SubscriberConfigBuilder, init_from_env, init_subscriber};
pub use tracer::ProviderTracer;

/// Mask a credential-like value for log output.
pub fn mask_sensitive_value(value: &str) -> String {
    if !value.is_ascii() {
        return "***".to_string();
    }
    if let Some(token) = value.strip_prefix("Bearer ")
        && token.len() > 8
    {
        return format!("Bearer {}...{}", &token[..4], &token[token.len() - 4..]);
    }
    if value.starts_with("gsk_") && value.len() > 12 {
        return format!("{}...{}", &value[..8], &value[value.len() - 4..]);
    }
    if value.len() > 16 {
        format!("{}...{}", &value[..6], &value[value.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_tokens_are_masked() {
        assert_eq!(
            mask_sensitive_value("Bearer gsk_abcdefghijklmnop"),
            "Bearer gsk_...mnop"
        );
    }

    #[test]
    fn short_values_are_fully_hidden() {
        assert_eq!(mask_sensitive_value("secret"), "***");
    }

    #[test]
    fn long_keys_keep_only_edges() {
        let masked = mask_sensitive_value("AIzaSyD-1234567890abcdefghij");
        assert_eq!(masked, "AIzaSy...ghij");
    }
}
