//! In-memory data store
//!
//! The entire dataset lives in process memory for the lifetime of the
//! server; there is no persistence. Collections are seeded once from the
//! sample generator (or injected by tests) and mutated only through the
//! operations below.

pub mod sample;

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use thiserror::Error;

use shared::models::{
    Alert, AlertStatus, Feedback, FeedbackSubmit, Hotel, HotelUpdate, QrCode, QrCodeCreate, User,
    UserCreate, Zone, ZoneCreate,
};

use crate::alerts::{self, TransitionError};
use crate::utils::AppError;

pub use sample::SampleDataset;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Validation(msg) => AppError::Validation(msg),
            StoreError::BusinessRule(msg) => AppError::BusinessRule(msg),
        }
    }
}

impl From<TransitionError> for StoreError {
    fn from(err: TransitionError) -> Self {
        StoreError::BusinessRule(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Per-resource id allocator
///
/// DashMap-backed atomic counters, one per resource type. New records
/// get sequential string ids continuing wherever the sample dataset
/// left off.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counters: DashMap<String, u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    /// Mint the next id for the given resource
    pub fn next(&self, resource: &str) -> String {
        let mut entry = self.counters.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        entry.to_string()
    }

    /// Raise the counter so future ids start after `highest`
    pub fn reserve(&self, resource: &str, highest: u64) {
        let mut entry = self.counters.entry(resource.to_string()).or_insert(0);
        if *entry < highest {
            *entry = highest;
        }
    }
}

/// In-memory dataset with interior mutability
///
/// One instance is shared behind an `Arc` by every handler. Reads clone
/// out of the lock; writes hold it only for the mutation itself.
#[derive(Debug)]
pub struct DataStore {
    users: RwLock<Vec<User>>,
    hotels: RwLock<Vec<Hotel>>,
    zones: RwLock<Vec<Zone>>,
    qr_codes: RwLock<Vec<QrCode>>,
    feedback: RwLock<Vec<Feedback>>,
    alerts: RwLock<Vec<Alert>>,
    ids: IdAllocator,
}

/// Placeholder for references that fail to resolve
pub const UNKNOWN_ZONE: &str = "Unknown Zone";

impl DataStore {
    /// Build a store from a generated (or fixture) dataset
    pub fn from_dataset(dataset: SampleDataset) -> Self {
        let ids = IdAllocator::new();
        ids.reserve("user", max_id(&dataset.users, |u| &u.id));
        ids.reserve("hotel", max_id(&dataset.hotels, |h| &h.id));
        ids.reserve("zone", max_id(&dataset.zones, |z| &z.id));
        ids.reserve("qrcode", max_id(&dataset.qr_codes, |q| &q.id));
        ids.reserve("feedback", max_id(&dataset.feedback, |f| &f.id));
        ids.reserve("alert", max_id(&dataset.alerts, |a| &a.id));

        Self {
            users: RwLock::new(dataset.users),
            hotels: RwLock::new(dataset.hotels),
            zones: RwLock::new(dataset.zones),
            qr_codes: RwLock::new(dataset.qr_codes),
            feedback: RwLock::new(dataset.feedback),
            alerts: RwLock::new(dataset.alerts),
            ids,
        }
    }

    // ========== Users ==========

    pub fn users(&self) -> Vec<User> {
        self.users.read().clone()
    }

    pub fn user_by_id(&self, id: &str) -> Option<User> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    pub fn create_user(&self, data: UserCreate) -> User {
        let user = User {
            id: self.ids.next("user"),
            name: data.name,
            email: data.email,
            role: data.role,
            avatar_url: data.avatar_url,
        };
        self.users.write().push(user.clone());
        user
    }

    // ========== Hotels ==========

    pub fn hotels(&self) -> Vec<Hotel> {
        self.hotels.read().clone()
    }

    pub fn hotel_by_id(&self, id: &str) -> Option<Hotel> {
        self.hotels.read().iter().find(|h| h.id == id).cloned()
    }

    /// The hotel the dashboard is scoped to (first in the dataset)
    pub fn primary_hotel(&self) -> Option<Hotel> {
        self.hotels.read().first().cloned()
    }

    pub fn update_hotel(&self, id: &str, data: HotelUpdate) -> StoreResult<Hotel> {
        let mut hotels = self.hotels.write();
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Hotel {id} not found")))?;

        if let Some(name) = data.name {
            hotel.name = name;
        }
        if let Some(logo_url) = data.logo_url {
            hotel.logo_url = Some(logo_url);
        }
        if let Some(address) = data.address {
            hotel.address = address;
        }
        if let Some(city) = data.city {
            hotel.city = city;
        }
        if let Some(country) = data.country {
            hotel.country = country;
        }
        if let Some(phone) = data.phone {
            hotel.phone = phone;
        }
        if let Some(email) = data.email {
            hotel.email = email;
        }
        if let Some(website) = data.website {
            hotel.website = Some(website);
        }

        Ok(hotel.clone())
    }

    // ========== Zones ==========

    pub fn zones(&self) -> Vec<Zone> {
        self.zones.read().clone()
    }

    pub fn zone_by_id(&self, id: &str) -> Option<Zone> {
        self.zones.read().iter().find(|z| z.id == id).cloned()
    }

    /// Zone name for display; falls back to a placeholder when the
    /// reference does not resolve
    pub fn zone_name(&self, id: &str) -> String {
        self.zone_by_id(id)
            .map(|z| z.name)
            .unwrap_or_else(|| UNKNOWN_ZONE.to_string())
    }

    pub fn create_zone(&self, data: ZoneCreate) -> StoreResult<Zone> {
        if self.hotel_by_id(&data.hotel_id).is_none() {
            return Err(StoreError::NotFound(format!(
                "Hotel {} not found",
                data.hotel_id
            )));
        }
        let zone = Zone {
            id: self.ids.next("zone"),
            hotel_id: data.hotel_id,
            name: data.name,
            description: data.description,
            zone_type: data.zone_type,
        };
        self.zones.write().push(zone.clone());
        Ok(zone)
    }

    // ========== QR Codes ==========

    pub fn qr_codes(&self) -> Vec<QrCode> {
        self.qr_codes.read().clone()
    }

    pub fn qr_code_by_id(&self, id: &str) -> Option<QrCode> {
        self.qr_codes.read().iter().find(|q| q.id == id).cloned()
    }

    pub fn create_qr_code(&self, data: QrCodeCreate) -> StoreResult<QrCode> {
        if self.zone_by_id(&data.zone_id).is_none() {
            return Err(StoreError::NotFound(format!(
                "Zone {} not found",
                data.zone_id
            )));
        }
        let now = Utc::now();
        let qr_code = QrCode {
            id: self.ids.next("qrcode"),
            zone_id: data.zone_id,
            name: data.name,
            created_at: now,
            updated_at: now,
            custom_questions: data.custom_questions,
        };
        self.qr_codes.write().push(qr_code.clone());
        Ok(qr_code)
    }

    // ========== Feedback ==========

    pub fn feedback(&self) -> Vec<Feedback> {
        self.feedback.read().clone()
    }

    pub fn feedback_by_id(&self, id: &str) -> Option<Feedback> {
        self.feedback.read().iter().find(|f| f.id == id).cloned()
    }

    /// Record a new feedback submission
    ///
    /// Validates the rating range and both references, then appends the
    /// record. A rating ≤ 2 synchronously derives a fresh alert (status
    /// `new`, unassigned).
    pub fn record_feedback(
        &self,
        data: FeedbackSubmit,
    ) -> StoreResult<(Feedback, Option<Alert>)> {
        if !(1..=5).contains(&data.rating) {
            return Err(StoreError::Validation(format!(
                "Rating must be between 1 and 5, got {}",
                data.rating
            )));
        }
        let zone = self
            .zone_by_id(&data.zone_id)
            .ok_or_else(|| StoreError::NotFound(format!("Zone {} not found", data.zone_id)))?;
        if self.qr_code_by_id(&data.qr_code_id).is_none() {
            return Err(StoreError::NotFound(format!(
                "QR code {} not found",
                data.qr_code_id
            )));
        }

        let feedback = Feedback {
            id: self.ids.next("feedback"),
            qr_code_id: data.qr_code_id,
            zone_id: data.zone_id,
            hotel_id: zone.hotel_id,
            rating: data.rating,
            comment: data.comment,
            created_at: Utc::now(),
            responses: data.responses,
        };
        self.feedback.write().push(feedback.clone());

        let alert = alerts::derive_from_feedback(&feedback, || self.ids.next("alert"));
        if let Some(ref alert) = alert {
            self.alerts.write().push(alert.clone());
            tracing::info!(
                feedback_id = %feedback.id,
                alert_id = %alert.id,
                rating = feedback.rating,
                "Low rating flagged for follow-up"
            );
        }

        Ok((feedback, alert))
    }

    // ========== Alerts ==========

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().clone()
    }

    pub fn alert_by_id(&self, id: &str) -> Option<Alert> {
        self.alerts.read().iter().find(|a| a.id == id).cloned()
    }

    /// Assign an alert to a staff member (new/in_progress → in_progress)
    pub fn assign_alert(&self, id: &str, user_id: &str) -> StoreResult<Alert> {
        if self.user_by_id(user_id).is_none() {
            return Err(StoreError::NotFound(format!("User {user_id} not found")));
        }
        let mut alerts = self.alerts.write();
        let alert = alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Alert {id} not found")))?;
        alerts::assign(alert, user_id)?;
        Ok(alert.clone())
    }

    /// Resolve an alert (no-op if already resolved)
    pub fn resolve_alert(&self, id: &str) -> StoreResult<Alert> {
        let mut alerts = self.alerts.write();
        let alert = alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("Alert {id} not found")))?;
        alerts::resolve(alert, Utc::now());
        Ok(alert.clone())
    }

    /// Alerts still awaiting resolution
    pub fn pending_alert_count(&self) -> usize {
        self.alerts
            .read()
            .iter()
            .filter(|a| a.status != AlertStatus::Resolved)
            .count()
    }

    /// Record counts per collection (health endpoint)
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.read().len(),
            hotels: self.hotels.read().len(),
            zones: self.zones.read().len(),
            qr_codes: self.qr_codes.read().len(),
            feedback: self.feedback.read().len(),
            alerts: self.alerts.read().len(),
        }
    }
}

/// Collection sizes reported by the health endpoint
#[derive(Debug, Clone, serde::Serialize)]
pub struct StoreCounts {
    pub users: usize,
    pub hotels: usize,
    pub zones: usize,
    pub qr_codes: usize,
    pub feedback: usize,
    pub alerts: usize,
}

fn max_id<T>(items: &[T], id: impl Fn(&T) -> &str) -> u64 {
    items
        .iter()
        .filter_map(|item| id(item).parse().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{UserRole, ZoneType};

    fn seeded_store() -> DataStore {
        DataStore::from_dataset(sample::generate(42, 100))
    }

    #[test]
    fn ids_continue_after_sample_dataset() {
        let store = seeded_store();
        let zone = store
            .create_zone(ZoneCreate {
                hotel_id: "1".into(),
                name: "Rooftop Bar".into(),
                description: None,
                zone_type: ZoneType::Other,
            })
            .unwrap();
        // Sample dataset ships zones 1..=8
        assert_eq!(zone.id, "9");
    }

    #[test]
    fn zone_name_falls_back_to_placeholder() {
        let store = seeded_store();
        assert_eq!(store.zone_name("1"), "Main Restaurant");
        assert_eq!(store.zone_name("999"), UNKNOWN_ZONE);
    }

    #[test]
    fn create_zone_requires_existing_hotel() {
        let store = seeded_store();
        let err = store
            .create_zone(ZoneCreate {
                hotel_id: "404".into(),
                name: "Nowhere".into(),
                description: None,
                zone_type: ZoneType::Other,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn low_rating_submission_derives_new_alert() {
        let store = seeded_store();
        let before = store.alerts().len();
        let (feedback, alert) = store
            .record_feedback(FeedbackSubmit {
                qr_code_id: "1".into(),
                zone_id: "1".into(),
                rating: 1,
                comment: Some("Cold food".into()),
                responses: None,
            })
            .unwrap();
        let alert = alert.expect("rating 1 must create an alert");
        assert_eq!(alert.feedback_id, feedback.id);
        assert_eq!(alert.status, AlertStatus::New);
        assert_eq!(alert.assigned_to, None);
        assert_eq!(alert.created_at, feedback.created_at);
        assert_eq!(store.alerts().len(), before + 1);
    }

    #[test]
    fn high_rating_submission_creates_no_alert() {
        let store = seeded_store();
        let (_, alert) = store
            .record_feedback(FeedbackSubmit {
                qr_code_id: "1".into(),
                zone_id: "1".into(),
                rating: 5,
                comment: None,
                responses: None,
            })
            .unwrap();
        assert!(alert.is_none());
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let store = seeded_store();
        let err = store
            .record_feedback(FeedbackSubmit {
                qr_code_id: "1".into(),
                zone_id: "1".into(),
                rating: 6,
                comment: None,
                responses: None,
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn assign_requires_known_user() {
        let store = seeded_store();
        let (_, alert) = store
            .record_feedback(FeedbackSubmit {
                qr_code_id: "1".into(),
                zone_id: "1".into(),
                rating: 2,
                comment: None,
                responses: None,
            })
            .unwrap();
        let alert = alert.unwrap();
        let err = store.assign_alert(&alert.id, "404").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        let assigned = store.assign_alert(&alert.id, "3").unwrap();
        assert_eq!(assigned.status, AlertStatus::InProgress);
        assert_eq!(assigned.assigned_to.as_deref(), Some("3"));
    }

    #[test]
    fn hotel_update_merges_partial_fields() {
        let store = seeded_store();
        let updated = store
            .update_hotel(
                "1",
                HotelUpdate {
                    name: Some("Grand Hotel".into()),
                    logo_url: None,
                    address: None,
                    city: None,
                    country: None,
                    phone: Some("+1 (415) 555-9999".into()),
                    email: None,
                    website: None,
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Grand Hotel");
        assert_eq!(updated.phone, "+1 (415) 555-9999");
        // Untouched fields keep the sample values
        assert_eq!(updated.city, "San Francisco");
    }

    #[test]
    fn create_user_mints_sequential_id() {
        let store = seeded_store();
        let user = store.create_user(UserCreate {
            name: "Maria Lopez".into(),
            email: "maria.lopez@grandhotel.com".into(),
            role: UserRole::Staff,
            avatar_url: None,
        });
        assert_eq!(user.id, "4");
        assert_eq!(store.users().len(), 4);
    }
}
