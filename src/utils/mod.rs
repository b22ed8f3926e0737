//! Utility functions shared by the services, handlers and the admin CLI.
//!
//! - [`day_bounds`] - UTC calendar-day parsing and boundaries
//! - [`password`] - Argon2 password hashing and verification
//! - [`slug`] - Category slugs and keyword-based category inference

pub mod day_bounds;
pub mod password;
pub mod slug;
