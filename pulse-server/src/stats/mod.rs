//! Stat aggregation
//!
//! Pure folds over feedback slices; no locking, no I/O. Handlers clone
//! the collection out of the store and pass it in together with the
//! window anchor date, so every computation here is reproducible.

use chrono::{Duration, Local, NaiveDate, TimeZone};

use shared::models::{DailyStat, Feedback, FeedbackStats, RatingBucket};

/// Days covered by the trend window (anchor day included)
pub const TREND_WINDOW_DAYS: i64 = 7;

/// Arithmetic mean of ratings; 0.0 for an empty slice
pub fn average_rating(feedback: &[Feedback]) -> f64 {
    if feedback.is_empty() {
        return 0.0;
    }
    let sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
    f64::from(sum) / feedback.len() as f64
}

/// Fixed 5-bucket histogram over ratings 1..=5, ascending
pub fn rating_histogram(feedback: &[Feedback]) -> Vec<RatingBucket> {
    let mut counts = [0usize; 5];
    for f in feedback {
        if (1..=5).contains(&f.rating) {
            counts[f.rating as usize - 1] += 1;
        }
    }
    (1..=5u8)
        .map(|rating| RatingBucket {
            rating,
            count: counts[rating as usize - 1],
        })
        .collect()
}

/// Calendar day of a feedback record in the server's local timezone
fn local_date(feedback: &Feedback) -> NaiveDate {
    Local.from_utc_datetime(&feedback.created_at.naive_utc()).date_naive()
}

/// Per-day counts and averages over the trailing window ending `today`
///
/// Always yields exactly [`TREND_WINDOW_DAYS`] entries, oldest first;
/// days without feedback report count 0 and average 0.0.
pub fn feedback_over_time(feedback: &[Feedback], today: NaiveDate) -> Vec<DailyStat> {
    (0..TREND_WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let day: Vec<&Feedback> =
                feedback.iter().filter(|f| local_date(f) == date).collect();
            let average_rating = if day.is_empty() {
                0.0
            } else {
                let sum: u32 = day.iter().map(|f| u32::from(f.rating)).sum();
                f64::from(sum) / day.len() as f64
            };
            DailyStat {
                date,
                average_rating,
                count: day.len(),
            }
        })
        .collect()
}

/// Full hotel-level summary
pub fn summarize(hotel_id: &str, feedback: &[Feedback], today: NaiveDate) -> FeedbackStats {
    FeedbackStats {
        hotel_id: hotel_id.to_string(),
        zone_id: None,
        average_rating: average_rating(feedback),
        total_feedback: feedback.len(),
        feedback_by_rating: rating_histogram(feedback),
        feedback_over_time: feedback_over_time(feedback, today),
    }
}

/// Zone-scoped summary: the same three computations restricted to one zone
pub fn summarize_zone(
    hotel_id: &str,
    zone_id: &str,
    feedback: &[Feedback],
    today: NaiveDate,
) -> FeedbackStats {
    let zone_feedback: Vec<Feedback> = feedback
        .iter()
        .filter(|f| f.zone_id == zone_id)
        .cloned()
        .collect();
    FeedbackStats {
        hotel_id: hotel_id.to_string(),
        zone_id: Some(zone_id.to_string()),
        average_rating: average_rating(&zone_feedback),
        total_feedback: zone_feedback.len(),
        feedback_by_rating: rating_histogram(&zone_feedback),
        feedback_over_time: feedback_over_time(&zone_feedback, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, NaiveTime, Utc};

    fn on_day(date: NaiveDate, rating: u8, zone_id: &str) -> Feedback {
        // Noon local time keeps the record inside `date` in every timezone
        let noon = date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        let created_at: DateTime<Utc> = Local
            .from_local_datetime(&noon)
            .single()
            .expect("unambiguous local noon")
            .with_timezone(&Utc);
        Feedback {
            id: "0".into(),
            qr_code_id: "1".into(),
            zone_id: zone_id.into(),
            hotel_id: "1".into(),
            rating,
            comment: None,
            created_at,
            responses: None,
        }
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, n).unwrap()
    }

    #[test]
    fn average_of_empty_list_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_is_sum_over_len() {
        let feedback: Vec<Feedback> = [1u8, 2, 3, 4, 5, 5]
            .iter()
            .map(|&r| on_day(day(20), r, "1"))
            .collect();
        let expected = 20.0 / 6.0;
        assert!((average_rating(&feedback) - expected).abs() < 1e-9);
    }

    #[test]
    fn histogram_counts_partition_the_input() {
        let ratings = [1u8, 2, 3, 4, 5, 1, 2, 5, 5, 3];
        let feedback: Vec<Feedback> =
            ratings.iter().map(|&r| on_day(day(20), r, "1")).collect();
        let histogram = rating_histogram(&feedback);

        assert_eq!(histogram.len(), 5);
        let ascending: Vec<u8> = histogram.iter().map(|b| b.rating).collect();
        assert_eq!(ascending, vec![1, 2, 3, 4, 5]);
        let total: usize = histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, feedback.len());
        assert_eq!(histogram[4].count, 3); // three 5-star ratings
    }

    #[test]
    fn histogram_of_empty_list_is_five_zero_buckets() {
        let histogram = rating_histogram(&[]);
        assert_eq!(histogram.len(), 5);
        assert!(histogram.iter().all(|b| b.count == 0));
    }

    #[test]
    fn trend_always_has_seven_entries_oldest_first() {
        let trend = feedback_over_time(&[], day(20));
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, day(14));
        assert_eq!(trend[6].date, day(20));
        assert!(trend.iter().all(|d| d.count == 0 && d.average_rating == 0.0));
    }

    #[test]
    fn trend_buckets_by_calendar_day() {
        let feedback = vec![
            on_day(day(20), 5, "1"),
            on_day(day(20), 3, "1"),
            on_day(day(18), 1, "1"),
            // Outside the window ending on the 20th
            on_day(day(13), 2, "1"),
        ];
        let trend = feedback_over_time(&feedback, day(20));

        assert_eq!(trend[6].count, 2);
        assert!((trend[6].average_rating - 4.0).abs() < 1e-9);
        assert_eq!(trend[4].count, 1);
        assert!((trend[4].average_rating - 1.0).abs() < 1e-9);

        let window_total: usize = trend.iter().map(|d| d.count).sum();
        assert_eq!(window_total, 3);
    }

    #[test]
    fn zone_summary_restricts_to_the_zone() {
        let feedback = vec![
            on_day(day(20), 5, "1"),
            on_day(day(20), 1, "2"),
            on_day(day(19), 2, "2"),
        ];
        let stats = summarize_zone("1", "2", &feedback, day(20));
        assert_eq!(stats.zone_id.as_deref(), Some("2"));
        assert_eq!(stats.total_feedback, 2);
        assert!((stats.average_rating - 1.5).abs() < 1e-9);
    }

    #[test]
    fn hotel_summary_covers_everything() {
        let feedback = vec![on_day(day(20), 4, "1"), on_day(day(19), 2, "2")];
        let stats = summarize("1", &feedback, day(20));
        assert_eq!(stats.hotel_id, "1");
        assert_eq!(stats.zone_id, None);
        assert_eq!(stats.total_feedback, 2);
        assert_eq!(stats.feedback_over_time.len(), 7);
    }
}
