//! HTTP middleware for request processing and protection.
//!
//! Provides the admin session gate, rate limiting, and observability middleware.

pub mod admin_auth;
pub mod rate_limit;
pub mod tracing;
