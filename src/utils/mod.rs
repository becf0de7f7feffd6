//! Utility functions for code generation and response building.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`short_url`] - Absolute short URL construction from config or `Host`

pub mod code_generator;
pub mod short_url;
