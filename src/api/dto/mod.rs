//! Data Transfer Objects for API requests and responses.
//!
//! Wire field names are camelCase. Request DTOs carry `validator` rules and
//! are checked in the handlers before reaching the services.

pub mod admin_category;
pub mod admin_service;
pub mod appointment;
pub mod auth;
pub mod availability;
pub mod catalog;
pub mod health;
pub mod pagination;
