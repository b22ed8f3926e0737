//! Repository trait for barbers.

use crate::domain::entities::Barber;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BarberRepository: Send + Sync {
    /// Lists barbers ordered by name with the services they offer.
    ///
    /// When `service_id` is given, only barbers offering that service are
    /// returned.
    async fn list(&self, service_id: Option<String>) -> Result<Vec<Barber>, AppError>;
}
