//! HTTP API layer.
//!
//! Translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - JSON API route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
