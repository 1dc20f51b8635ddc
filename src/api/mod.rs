//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and service results into
//! status codes and JSON bodies.
//!
//! - [`dto`] - Request/response bodies and query parameters
//! - [`extractors`] - Request extractors that reject with [`crate::error::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Bearer authentication and request tracing
//! - [`routes`] - Route groups

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
