//! Sample dataset generator
//!
//! Builds the demo dataset the dashboard ships with: a fixed roster of
//! users, hotels, zones and QR codes, plus a seeded batch of feedback
//! spread over the trailing 30 days and the alerts derived from it.
//!
//! Generation is fully deterministic for a given seed so a restarted
//! server (or a test) sees the same dataset.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shared::models::{
    Alert, AlertStatus, Answer, Feedback, Hotel, QrCode, Question, QuestionResponse, User,
    UserRole, Zone, ZoneType,
};

use crate::alerts::ALERT_RATING_THRESHOLD;

/// Everything the store is seeded with
#[derive(Debug, Clone, Default)]
pub struct SampleDataset {
    pub users: Vec<User>,
    pub hotels: Vec<Hotel>,
    pub zones: Vec<Zone>,
    pub qr_codes: Vec<QrCode>,
    pub feedback: Vec<Feedback>,
    pub alerts: Vec<Alert>,
}

/// Generate the sample dataset
pub fn generate(seed: u64, feedback_count: usize) -> SampleDataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let users = sample_users();
    let hotels = sample_hotels();
    let zones = sample_zones();
    let qr_codes = sample_qr_codes();
    let feedback = generate_feedback(&mut rng, feedback_count);
    let alerts = generate_alerts(&mut rng, &feedback);

    SampleDataset {
        users,
        hotels,
        zones,
        qr_codes,
        feedback,
        alerts,
    }
}

fn sample_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Jane Smith".into(),
            email: "jane.smith@grandhotel.com".into(),
            role: UserRole::Admin,
            avatar_url: Some("https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150".into()),
        },
        User {
            id: "2".into(),
            name: "John Davis".into(),
            email: "john.davis@grandhotel.com".into(),
            role: UserRole::Manager,
            avatar_url: Some("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150".into()),
        },
        User {
            id: "3".into(),
            name: "Emily Wilson".into(),
            email: "emily.wilson@grandhotel.com".into(),
            role: UserRole::Staff,
            avatar_url: Some("https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150".into()),
        },
    ]
}

fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "1".into(),
            name: "Grand Hotel & Spa".into(),
            logo_url: Some("https://images.pexels.com/photos/1268855/pexels-photo-1268855.jpeg?auto=compress&cs=tinysrgb&w=150".into()),
            address: "123 Luxury Lane".into(),
            city: "San Francisco".into(),
            country: "USA".into(),
            phone: "+1 (415) 555-1234".into(),
            email: "info@grandhotel.com".into(),
            website: Some("https://www.grandhotel.com".into()),
        },
        Hotel {
            id: "2".into(),
            name: "Oceanview Resort".into(),
            logo_url: Some("https://images.pexels.com/photos/338504/pexels-photo-338504.jpeg?auto=compress&cs=tinysrgb&w=150".into()),
            address: "456 Seaside Blvd".into(),
            city: "Miami".into(),
            country: "USA".into(),
            phone: "+1 (305) 555-5678".into(),
            email: "info@oceanviewresort.com".into(),
            website: Some("https://www.oceanviewresort.com".into()),
        },
    ]
}

fn zone(id: &str, hotel_id: &str, name: &str, description: &str, zone_type: ZoneType) -> Zone {
    Zone {
        id: id.into(),
        hotel_id: hotel_id.into(),
        name: name.into(),
        description: Some(description.into()),
        zone_type,
    }
}

fn sample_zones() -> Vec<Zone> {
    vec![
        zone("1", "1", "Main Restaurant", "Fine dining experience", ZoneType::Restaurant),
        zone("2", "1", "Lobby", "Main entrance and reception", ZoneType::Lobby),
        zone("3", "1", "Swimming Pool", "Outdoor infinity pool", ZoneType::Pool),
        zone("4", "1", "Deluxe Rooms", "Floors 3-5", ZoneType::Room),
        zone("5", "1", "Wellness Spa", "Relaxation and treatments", ZoneType::Spa),
        zone("6", "2", "Beachfront Restaurant", "Casual dining with ocean view", ZoneType::Restaurant),
        zone("7", "2", "Lobby", "Main entrance and reception", ZoneType::Lobby),
        zone("8", "2", "Beach Pool", "Beachside infinity pool", ZoneType::Pool),
    ]
}

fn sample_qr_codes() -> Vec<QrCode> {
    let now = Utc::now();
    vec![
        QrCode {
            id: "1".into(),
            zone_id: "1".into(),
            name: "Restaurant Table Cards".into(),
            created_at: now - Duration::days(18),
            updated_at: now - Duration::days(18),
            custom_questions: Some(vec![
                Question::rating("1", "How would you rate your dining experience?", true),
                Question::rating("2", "How was the service?", true),
                Question::multiple_choice(
                    "3",
                    "Would you recommend our restaurant to others?",
                    vec!["Yes".into(), "Maybe".into(), "No".into()],
                    false,
                ),
                Question::text("4", "Any suggestions for improvement?", false),
            ]),
        },
        QrCode {
            id: "2".into(),
            zone_id: "2".into(),
            name: "Lobby Welcome Desk".into(),
            created_at: now - Duration::days(17),
            updated_at: now - Duration::days(17),
            custom_questions: Some(vec![
                Question::rating("5", "How was your check-in experience?", true),
                Question::rating("6", "Were our staff helpful?", true),
                Question::text("7", "Any comments about our lobby facilities?", false),
            ]),
        },
        QrCode {
            id: "3".into(),
            zone_id: "3".into(),
            name: "Pool Area".into(),
            created_at: now - Duration::days(16),
            updated_at: now - Duration::days(16),
            custom_questions: Some(vec![
                Question::rating("8", "How would you rate the cleanliness of our pool?", true),
                Question::rating("9", "How was the service from our pool staff?", true),
                Question::text("10", "Any suggestions for our pool area?", false),
            ]),
        },
    ]
}

fn generate_feedback(rng: &mut StdRng, count: usize) -> Vec<Feedback> {
    let now = Utc::now();
    let mut feedback = Vec::with_capacity(count);

    for i in 1..=count {
        // Zones 1-3 each have a matching QR code with the same index
        let zone_index = rng.gen_range(0..3u32);
        let zone_id = (zone_index + 1).to_string();
        let qr_code_id = zone_id.clone();
        let rating = rng.gen_range(1..=5u8);
        let days_ago = rng.gen_range(0..30i64);
        let created_at = now - Duration::days(days_ago);

        let comment = if rating < 4 {
            "Could use some improvement"
        } else {
            "Excellent service!"
        };

        feedback.push(Feedback {
            id: i.to_string(),
            qr_code_id,
            zone_id,
            hotel_id: "1".into(),
            rating,
            comment: Some(comment.into()),
            created_at,
            responses: Some(vec![
                QuestionResponse {
                    question_id: (zone_index * 3 + 1).to_string(),
                    answer: Answer::Rating(rating),
                },
                QuestionResponse {
                    question_id: (zone_index * 3 + 2).to_string(),
                    answer: Answer::Rating(rng.gen_range(1..=5u8)),
                },
            ]),
        });
    }

    feedback
}

/// Derive alerts for every low-rating feedback row
///
/// Statuses are weighted (~40% resolved, ~30% in progress, ~30% new)
/// so the dashboard opens with a lived-in worklist. In-progress alerts
/// always carry an assignee; otherwise assignment is a coin flip on
/// the staff user.
fn generate_alerts(rng: &mut StdRng, feedback: &[Feedback]) -> Vec<Alert> {
    feedback
        .iter()
        .filter(|f| f.rating <= ALERT_RATING_THRESHOLD)
        .enumerate()
        .map(|(index, f)| {
            let roll: f64 = rng.r#gen();
            let status = if roll < 0.4 {
                AlertStatus::Resolved
            } else if roll < 0.7 {
                AlertStatus::InProgress
            } else {
                AlertStatus::New
            };

            let assigned_to = match status {
                AlertStatus::New => None,
                AlertStatus::InProgress => Some("3".to_string()),
                AlertStatus::Resolved => rng.gen_bool(0.5).then(|| "3".to_string()),
            };

            let resolved_at = (status == AlertStatus::Resolved)
                .then(|| f.created_at + Duration::hours(rng.gen_range(1..=48)));

            Alert {
                id: (index + 1).to_string(),
                feedback_id: f.id.clone(),
                hotel_id: f.hotel_id.clone(),
                zone_id: f.zone_id.clone(),
                status,
                assigned_to,
                created_at: f.created_at,
                resolved_at,
            }
        })
        .collect()
}
