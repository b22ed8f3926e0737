//! Barber entity.

use serde::{Deserialize, Serialize};

use super::service::ServiceSummary;

/// A staff member and the services they offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barber {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub services: Vec<ServiceSummary>,
}

impl Barber {
    /// Returns true if the barber offers the given service.
    pub fn offers(&self, service_id: &str) -> bool {
        self.services.iter().any(|s| s.id == service_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offers() {
        let barber = Barber {
            id: "barber-1".to_string(),
            name: "Alex Fade".to_string(),
            bio: None,
            photo_url: None,
            services: vec![ServiceSummary {
                id: "svc-1".to_string(),
                name: "Classic Cut".to_string(),
                duration_minutes: 45,
                price_cents: 3000,
            }],
        };

        assert!(barber.offers("svc-1"));
        assert!(!barber.offers("svc-2"));
    }
}
