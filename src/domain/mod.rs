//! Domain layer containing business entities and repository contracts.
//!
//! This module holds the core booking model independent of infrastructure
//! concerns. Persistence lives in [`crate::infrastructure::persistence`] and
//! business rules in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`session_sweeper`] - Background removal of expired admin sessions

pub mod entities;
pub mod repositories;
pub mod session_sweeper;
