//! DTOs for the public catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Barber, Category, CategoryRef, Service, ServiceSummary};

#[derive(Debug, Serialize)]
pub struct CategoryRefItem {
    pub id: String,
    pub name: String,
}

impl From<CategoryRef> for CategoryRefItem {
    fn from(c: CategoryRef) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i32,
    pub is_active: bool,
    pub categories: Vec<CategoryRefItem>,
}

impl From<Service> for ServiceItem {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            duration_minutes: s.duration_minutes,
            price_cents: s.price_cents,
            is_active: s.is_active,
            categories: s.categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

impl From<Category> for CategoryItem {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            is_active: c.is_active,
            sort_order: c.sort_order,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberServiceItem {
    pub id: String,
    pub name: String,
    pub duration_minutes: i32,
    pub price_cents: i32,
}

impl From<ServiceSummary> for BarberServiceItem {
    fn from(s: ServiceSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            duration_minutes: s.duration_minutes,
            price_cents: s.price_cents,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarberItem {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub services: Vec<BarberServiceItem>,
}

impl From<Barber> for BarberItem {
    fn from(b: Barber) -> Self {
        Self {
            id: b.id,
            name: b.name,
            bio: b.bio,
            photo_url: b.photo_url,
            services: b.services.into_iter().map(Into::into).collect(),
        }
    }
}

/// `GET /api/barbers` query string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarbersQuery {
    #[serde(default)]
    pub service_id: Option<String>,
}
