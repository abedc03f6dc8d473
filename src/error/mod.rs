//! Error Handling Module
//!
//! This module provides the error taxonomy shared by the registry, the
//! upstream adapters, the stream normalizer and the HTTP surface:
//! - Core error type (`RelayError`) and its coarse `ErrorCategory`
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use chatrelay::error::{ErrorCategory, RelayError};
//!
//! let error = RelayError::UnknownModel("gpt-5".into());
//! assert_eq!(error.category(), ErrorCategory::Client);
//! ```

mod conversions;
pub mod types;

pub use types::*;
