//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into application service calls and
//! formats responses according to the API contract.
//!
//! # Modules
//!
//! - [`extract`] - JSON body extractor with API-formatted rejections
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Admin gate, rate limiting and tracing
//! - [`routes`] - Route configuration and composition
//! - [`cookies`] - The admin session cookie

pub mod cookies;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
