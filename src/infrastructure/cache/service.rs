//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Keys under which the public catalog lists are cached.
pub mod keys {
    pub const SERVICES: &str = "catalog:services";
    pub const CATEGORIES: &str = "catalog:categories";
    pub const BARBERS: &str = "catalog:barbers";
}

/// Trait for caching serialized catalog lists.
///
/// Implementations must be thread-safe and fail open: a cache failure is
/// logged and degrades to a database read, it never fails the request.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached JSON stored under `key`.
    ///
    /// `Ok(None)` on a miss and on backend errors.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`. `ttl_seconds = None` uses the
    /// implementation default.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes the entry stored under `key`.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
