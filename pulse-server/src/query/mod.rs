//! List filtering and sorting
//!
//! Pure helpers behind the dashboard list views. Filters are equality
//! predicates and never reorder; sorting is a separate step applied
//! after filtering, before render.

use shared::models::{Alert, AlertStatus, Feedback, QrCode, Zone};

/// Feedback list filter (all predicates optional, combined with AND)
#[derive(Debug, Clone, Default)]
pub struct FeedbackFilter {
    pub zone_id: Option<String>,
    pub rating: Option<u8>,
}

impl FeedbackFilter {
    pub fn matches(&self, feedback: &Feedback) -> bool {
        if let Some(zone_id) = &self.zone_id
            && feedback.zone_id != *zone_id
        {
            return false;
        }
        if let Some(rating) = self.rating
            && feedback.rating != rating
        {
            return false;
        }
        true
    }
}

/// Filter feedback, preserving input order
pub fn filter_feedback(feedback: &[Feedback], filter: &FeedbackFilter) -> Vec<Feedback> {
    feedback
        .iter()
        .filter(|f| filter.matches(f))
        .cloned()
        .collect()
}

/// Filter alerts by status, preserving input order
pub fn filter_alerts(alerts: &[Alert], status: Option<AlertStatus>) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|a| status.is_none_or(|s| a.status == s))
        .cloned()
        .collect()
}

/// Filter QR codes by zone, preserving input order
pub fn filter_qr_codes(qr_codes: &[QrCode], zone_id: Option<&str>) -> Vec<QrCode> {
    qr_codes
        .iter()
        .filter(|q| zone_id.is_none_or(|z| q.zone_id == z))
        .cloned()
        .collect()
}

/// Filter zones by hotel, preserving input order
pub fn filter_zones(zones: &[Zone], hotel_id: Option<&str>) -> Vec<Zone> {
    zones
        .iter()
        .filter(|z| hotel_id.is_none_or(|h| z.hotel_id == h))
        .cloned()
        .collect()
}

/// Newest first
pub fn sort_feedback(feedback: &mut [Feedback]) {
    feedback.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Status priority (new > in_progress > resolved), then newest first
pub fn sort_alerts(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| {
        a.status
            .priority()
            .cmp(&b.status.priority())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn feedback(id: &str, zone_id: &str, rating: u8, days_ago: i64) -> Feedback {
        Feedback {
            id: id.into(),
            qr_code_id: zone_id.into(),
            zone_id: zone_id.into(),
            hotel_id: "1".into(),
            rating,
            comment: None,
            created_at: Utc::now() - Duration::days(days_ago),
            responses: None,
        }
    }

    fn alert(id: &str, status: AlertStatus, days_ago: i64) -> Alert {
        Alert {
            id: id.into(),
            feedback_id: id.into(),
            hotel_id: "1".into(),
            zone_id: "1".into(),
            status,
            assigned_to: None,
            created_at: Utc::now() - Duration::days(days_ago),
            resolved_at: None,
        }
    }

    #[test]
    fn combined_predicates_are_anded() {
        let items: Vec<Feedback> = (0..100)
            .map(|i| {
                feedback(
                    &i.to_string(),
                    &((i % 3) + 1).to_string(),
                    (i % 5 + 1) as u8,
                    (i % 30) as i64,
                )
            })
            .collect();
        let filter = FeedbackFilter {
            zone_id: Some("2".into()),
            rating: Some(5),
        };
        let filtered = filter_feedback(&items, &filter);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|f| f.zone_id == "2" && f.rating == 5));
    }

    #[test]
    fn filtering_preserves_order() {
        let mut items: Vec<Feedback> = (0..20)
            .map(|i| feedback(&i.to_string(), "1", 5, i as i64))
            .collect();
        sort_feedback(&mut items);
        let order_before: Vec<String> = items.iter().map(|f| f.id.clone()).collect();

        let filtered = filter_feedback(
            &items,
            &FeedbackFilter {
                zone_id: Some("1".into()),
                rating: None,
            },
        );
        let order_after: Vec<String> = filtered.iter().map(|f| f.id.clone()).collect();
        assert_eq!(order_before, order_after);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let items = vec![feedback("1", "1", 3, 0), feedback("2", "2", 5, 1)];
        assert_eq!(
            filter_feedback(&items, &FeedbackFilter::default()).len(),
            items.len()
        );
    }

    #[test]
    fn feedback_sorts_newest_first() {
        let mut items = vec![
            feedback("old", "1", 3, 10),
            feedback("new", "1", 3, 0),
            feedback("mid", "1", 3, 5),
        ];
        sort_feedback(&mut items);
        let ids: Vec<&str> = items.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn alerts_sort_by_status_bucket_then_date() {
        let mut items = vec![
            alert("resolved-new", AlertStatus::Resolved, 0),
            alert("progress", AlertStatus::InProgress, 2),
            alert("new-old", AlertStatus::New, 9),
            alert("new-recent", AlertStatus::New, 1),
        ];
        sort_alerts(&mut items);
        let ids: Vec<&str> = items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new-recent", "new-old", "progress", "resolved-new"]);
    }

    #[test]
    fn alert_status_filter() {
        let items = vec![
            alert("a", AlertStatus::New, 0),
            alert("b", AlertStatus::Resolved, 1),
        ];
        let new_only = filter_alerts(&items, Some(AlertStatus::New));
        assert_eq!(new_only.len(), 1);
        assert_eq!(new_only[0].id, "a");
        assert_eq!(filter_alerts(&items, None).len(), 2);
    }
}
