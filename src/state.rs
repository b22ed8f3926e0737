//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, AvailabilityService, BookingService, CatalogService, CategoryService,
    ServiceAdminService,
};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::persistence::{
    PgAppointmentRepository, PgBarberRepository, PgCategoryRepository, PgServiceRepository,
    PgSessionRepository, PgSlotRepository, PgUserRepository,
};

pub type PgCatalogService =
    CatalogService<PgServiceRepository, PgCategoryRepository, PgBarberRepository>;
pub type PgAvailabilityService = AvailabilityService<PgSlotRepository>;
pub type PgBookingService =
    BookingService<PgAppointmentRepository, PgServiceRepository, PgSlotRepository>;
pub type PgAuthService = AuthService<PgUserRepository, PgSessionRepository>;
pub type PgServiceAdminService = ServiceAdminService<PgServiceRepository>;
pub type PgCategoryService = CategoryService<PgCategoryRepository, PgServiceRepository>;

/// Everything a request handler may need, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub catalog_service: Arc<PgCatalogService>,
    pub availability_service: Arc<PgAvailabilityService>,
    pub booking_service: Arc<PgBookingService>,
    pub auth_service: Arc<PgAuthService>,
    pub service_admin_service: Arc<PgServiceAdminService>,
    pub category_service: Arc<PgCategoryService>,
    pub cache: Arc<dyn CacheService>,
    /// Marks the session cookie `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    /// Wires the Postgres repositories into the application services.
    pub fn new(
        pool: Arc<PgPool>,
        cache: Arc<dyn CacheService>,
        signing_secret: String,
        session_ttl: chrono::Duration,
        cookie_secure: bool,
    ) -> Self {
        let service_repo = Arc::new(PgServiceRepository::new(pool.clone()));
        let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
        let barber_repo = Arc::new(PgBarberRepository::new(pool.clone()));
        let slot_repo = Arc::new(PgSlotRepository::new(pool.clone()));
        let appointment_repo = Arc::new(PgAppointmentRepository::new(pool.clone()));
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let session_repo = Arc::new(PgSessionRepository::new(pool.clone()));

        Self {
            catalog_service: Arc::new(CatalogService::new(
                service_repo.clone(),
                category_repo.clone(),
                barber_repo,
                cache.clone(),
            )),
            availability_service: Arc::new(AvailabilityService::new(slot_repo.clone())),
            booking_service: Arc::new(BookingService::new(
                appointment_repo,
                service_repo.clone(),
                slot_repo,
            )),
            auth_service: Arc::new(AuthService::new(
                user_repo,
                session_repo,
                signing_secret,
                session_ttl,
            )),
            service_admin_service: Arc::new(ServiceAdminService::new(
                service_repo.clone(),
                cache.clone(),
            )),
            category_service: Arc::new(CategoryService::new(
                category_repo,
                service_repo,
                cache.clone(),
            )),
            cache,
            db: pool,
            cookie_secure,
        }
    }
}
