//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use serde_json::json;

/// Number of random bytes per generated code. Hex encoding doubles it.
const CODE_LENGTH_BYTES: usize = 3;

/// Maximum length of a custom code.
const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Reserved codes that cannot be used as short links.
///
/// These collide with fixed routes of the HTTP layer.
pub const RESERVED_CODES: &[&str] = &["api", "health", "shortened", "static", "index.html"];

/// Generates a cryptographically secure random short code.
///
/// Draws 3 bytes from the OS entropy source and hex-encodes them, producing
/// a 6-character lowercase hexadecimal code (16^6 possible values).
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Validates a user-provided custom short code at the HTTP boundary.
///
/// The code is expected to be trimmed already.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
