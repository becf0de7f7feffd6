//! # Snaplink
//!
//! A small URL shortening service that keeps every `code -> URL` mapping in
//! a single JSON document.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entities and the repository contract
//! - **Application Layer** ([`application`]) - Code assignment and lookups
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character hex codes with bounded collision retry
//! - Optional caller-supplied custom codes
//! - Deduplication: a URL that is already shortened keeps its code
//! - Atomic full-snapshot persistence
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_FILE="urls.json"
//! cargo run
//!
//! curl 'http://localhost:3000/shortened?url=https://www.google.com'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Mapping, MappingSet};
    pub use crate::domain::errors::{AssignError, StoreError};
    pub use crate::domain::repositories::MappingRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
