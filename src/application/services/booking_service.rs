//! Appointment booking and admin status management.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Appointment, AppointmentStatus, NewAppointment};
use crate::domain::repositories::{AppointmentRepository, ServiceRepository, SlotRepository};
use crate::error::AppError;

/// Client-supplied booking details, already validated for shape.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub notes: Option<String>,
    pub service_id: String,
    pub slot_id: String,
    pub source: String,
}

/// Books slots and manages appointment status.
///
/// A slot holds at most one active appointment. The check here is a plain
/// read before the insert; the partial unique index on `appointments.slot_id`
/// settles races, surfacing as [`AppError::Conflict`].
pub struct BookingService<A, S, T>
where
    A: AppointmentRepository,
    S: ServiceRepository,
    T: SlotRepository,
{
    appointments: Arc<A>,
    services: Arc<S>,
    slots: Arc<T>,
}

impl<A, S, T> BookingService<A, S, T>
where
    A: AppointmentRepository,
    S: ServiceRepository,
    T: SlotRepository,
{
    pub fn new(appointments: Arc<A>, services: Arc<S>, slots: Arc<T>) -> Self {
        Self {
            appointments,
            services,
            slots,
        }
    }

    /// Creates a `PENDING` appointment for a free slot.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`AppError::NotFound`] if the service is missing or inactive
    /// - [`AppError::NotFound`] if the slot is missing or blocked
    /// - [`AppError::Conflict`] if the slot already has an active booking
    /// - [`AppError::Internal`] if the slot has no barber
    pub async fn book(&self, request: BookingRequest) -> Result<Appointment, AppError> {
        let service = self.services.find_by_id(&request.service_id).await?;
        if !service.is_some_and(|s| s.is_active) {
            return Err(AppError::not_found(
                "Service not found or inactive",
                json!({ "serviceId": request.service_id }),
            ));
        }

        let candidate = match self.slots.find_for_booking(&request.slot_id).await? {
            Some(c) if !c.slot.is_blocked => c,
            _ => {
                return Err(AppError::not_found(
                    "Time slot not available",
                    json!({ "slotId": request.slot_id }),
                ));
            }
        };

        if candidate.has_active_booking {
            metrics::counter!("booking_conflicts_total").increment(1);
            return Err(slot_taken(&request.slot_id));
        }

        let Some(barber_id) = candidate.slot.barber_id else {
            return Err(AppError::internal(
                "Time slot is not linked to a barber",
                json!({ "slotId": request.slot_id }),
            ));
        };

        let slot_id = request.slot_id.clone();
        let result = self
            .appointments
            .create(NewAppointment {
                client_name: request.client_name,
                client_email: request.client_email,
                client_phone: request.client_phone,
                notes: request.notes,
                status: AppointmentStatus::Pending,
                source: request.source,
                service_id: request.service_id,
                barber_id: Some(barber_id),
                slot_id: request.slot_id,
            })
            .await;

        match result {
            Ok(appointment) => {
                metrics::counter!("appointments_created_total").increment(1);
                tracing::info!(
                    appointment_id = %appointment.id,
                    slot_id = %appointment.slot.id,
                    "Appointment booked"
                );
                Ok(appointment)
            }
            Err(AppError::Conflict { .. }) => {
                metrics::counter!("booking_conflicts_total").increment(1);
                Err(slot_taken(&slot_id))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Appointment, AppError> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Appointments ordered by slot start, optionally of one status.
    pub async fn list(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>, AppError> {
        self.appointments.list(status).await
    }

    /// Sets the status with no transition rules.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown id and
    /// [`AppError::Conflict`] when reactivating an appointment whose slot is
    /// now held by another booking.
    pub async fn update_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        let appointment = match self.appointments.update_status(id, status).await {
            Ok(found) => found.ok_or_else(|| not_found(id))?,
            Err(e @ AppError::Conflict { .. }) if status.is_active() => {
                metrics::counter!("booking_conflicts_total").increment(1);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        tracing::info!(appointment_id = %id, status = %status, "Appointment status changed");
        Ok(appointment)
    }
}

fn slot_taken(slot_id: &str) -> AppError {
    AppError::conflict("Time slot already booked", json!({ "slotId": slot_id }))
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Appointment not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        AppointmentBarber, AppointmentService, AppointmentSlot, Service, SlotCandidate, TimeSlot,
    };
    use crate::domain::repositories::{
        MockAppointmentRepository, MockServiceRepository, MockSlotRepository,
    };
    use chrono::{TimeZone, Utc};

    fn active_service(active: bool) -> Service {
        Service {
            id: "svc-1".to_string(),
            name: "Classic Cut".to_string(),
            description: None,
            duration_minutes: 45,
            price_cents: 3000,
            is_active: active,
            categories: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn slot(barber: Option<&str>, blocked: bool, booked: bool) -> SlotCandidate {
        SlotCandidate {
            slot: TimeSlot {
                id: "slot-1".to_string(),
                barber_id: barber.map(String::from),
                start: Utc.with_ymd_and_hms(2025, 9, 25, 16, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2025, 9, 25, 16, 45, 0).unwrap(),
                is_blocked: blocked,
            },
            barber_name: barber.map(|_| "Alex".to_string()),
            barber_service_ids: vec!["svc-1".to_string()],
            has_active_booking: booked,
        }
    }

    fn appointment_from(new: NewAppointment) -> Appointment {
        Appointment {
            id: "appt-1".to_string(),
            client_name: new.client_name,
            client_email: new.client_email,
            client_phone: new.client_phone,
            notes: new.notes,
            status: new.status,
            source: new.source,
            service: AppointmentService {
                id: new.service_id,
                name: "Classic Cut".to_string(),
                description: None,
                duration_minutes: 45,
                price_cents: 3000,
                is_active: true,
            },
            barber: new.barber_id.map(|id| AppointmentBarber {
                id,
                name: "Alex".to_string(),
            }),
            slot: AppointmentSlot {
                id: new.slot_id,
                start: Utc.with_ymd_and_hms(2025, 9, 25, 16, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2025, 9, 25, 16, 45, 0).unwrap(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request() -> BookingRequest {
        BookingRequest {
            client_name: "Jane Doe".to_string(),
            client_email: Some("jane@example.com".to_string()),
            client_phone: None,
            notes: None,
            service_id: "svc-1".to_string(),
            slot_id: "slot-1".to_string(),
            source: "web".to_string(),
        }
    }

    fn booking(
        appointments: MockAppointmentRepository,
        services: MockServiceRepository,
        slots: MockSlotRepository,
    ) -> BookingService<MockAppointmentRepository, MockServiceRepository, MockSlotRepository> {
        BookingService::new(Arc::new(appointments), Arc::new(services), Arc::new(slots))
    }

    fn services_returning(service: Option<Service>) -> MockServiceRepository {
        let mut services = MockServiceRepository::new();
        services
            .expect_find_by_id()
            .returning(move |_| Ok(service.clone()));
        services
    }

    fn slots_returning(candidate: Option<SlotCandidate>) -> MockSlotRepository {
        let mut slots = MockSlotRepository::new();
        slots
            .expect_find_for_booking()
            .returning(move |_| Ok(candidate.clone()));
        slots
    }

    #[tokio::test]
    async fn test_book_creates_pending_appointment_with_slot_barber() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_create()
            .withf(|new| {
                new.status == AppointmentStatus::Pending
                    && new.barber_id.as_deref() == Some("barber-1")
                    && new.source == "web"
            })
            .times(1)
            .returning(|new| Ok(appointment_from(new)));

        let service = booking(
            appointments,
            services_returning(Some(active_service(true))),
            slots_returning(Some(slot(Some("barber-1"), false, false))),
        );

        let appointment = service.book(request()).await.unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.barber.unwrap().id, "barber-1");
    }

    #[tokio::test]
    async fn test_book_rejects_missing_service() {
        let service = booking(
            MockAppointmentRepository::new(),
            services_returning(None),
            MockSlotRepository::new(),
        );

        match service.book(request()).await {
            Err(AppError::NotFound { message, .. }) => {
                assert_eq!(message, "Service not found or inactive")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_book_rejects_inactive_service() {
        let service = booking(
            MockAppointmentRepository::new(),
            services_returning(Some(active_service(false))),
            MockSlotRepository::new(),
        );

        assert!(matches!(
            service.book(request()).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_book_rejects_missing_or_blocked_slot() {
        for candidate in [None, Some(slot(Some("barber-1"), true, false))] {
            let service = booking(
                MockAppointmentRepository::new(),
                services_returning(Some(active_service(true))),
                slots_returning(candidate),
            );

            match service.book(request()).await {
                Err(AppError::NotFound { message, .. }) => {
                    assert_eq!(message, "Time slot not available")
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_book_rejects_booked_slot() {
        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_create().never();

        let service = booking(
            appointments,
            services_returning(Some(active_service(true))),
            slots_returning(Some(slot(Some("barber-1"), false, true))),
        );

        match service.book(request()).await {
            Err(AppError::Conflict { message, .. }) => {
                assert_eq!(message, "Time slot already booked")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_book_rejects_slot_without_barber() {
        let service = booking(
            MockAppointmentRepository::new(),
            services_returning(Some(active_service(true))),
            slots_returning(Some(slot(None, false, false))),
        );

        match service.book(request()).await {
            Err(AppError::Internal { message, .. }) => {
                assert_eq!(message, "Time slot is not linked to a barber")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_book_lost_race_is_conflict() {
        let mut appointments = MockAppointmentRepository::new();
        appointments.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "appointments_active_slot_key" }),
            ))
        });

        let service = booking(
            appointments,
            services_returning(Some(active_service(true))),
            slots_returning(Some(slot(Some("barber-1"), false, false))),
        );

        match service.book(request()).await {
            Err(AppError::Conflict { message, .. }) => {
                assert_eq!(message, "Time slot already booked")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_status_unknown_is_not_found() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_update_status()
            .returning(|_, _| Ok(None));

        let service = booking(
            appointments,
            MockServiceRepository::new(),
            MockSlotRepository::new(),
        );

        assert!(matches!(
            service
                .update_status("missing", AppointmentStatus::Confirmed)
                .await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_reactivating_onto_taken_slot_conflicts() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_update_status()
            .withf(|id, status| id == "apt-1" && *status == AppointmentStatus::Pending)
            .returning(|_, _| {
                Err(AppError::conflict(
                    "Time slot already booked",
                    json!({ "slotId": "slot-1" }),
                ))
            });

        let service = booking(
            appointments,
            MockServiceRepository::new(),
            MockSlotRepository::new(),
        );

        match service.update_status("apt-1", AppointmentStatus::Pending).await {
            Err(AppError::Conflict { message, .. }) => {
                assert_eq!(message, "Time slot already booked")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_forwards_status_filter() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_list()
            .withf(|status| *status == Some(AppointmentStatus::Cancelled))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = booking(
            appointments,
            MockServiceRepository::new(),
            MockSlotRepository::new(),
        );

        assert!(
            service
                .list(Some(AppointmentStatus::Cancelled))
                .await
                .unwrap()
                .is_empty()
        );
    }
}
