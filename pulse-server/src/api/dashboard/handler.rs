//! Dashboard API Handlers

use axum::{Json, extract::State};
use chrono::Local;
use serde::Serialize;

use shared::models::FeedbackStats;

use crate::core::ServerState;
use crate::query;
use crate::stats;
use crate::utils::AppResult;

// ============================================================================
// Response Types
// ============================================================================

/// Headline numbers for the stat cards
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_feedback: usize,
    pub average_rating: f64,
    pub pending_alerts: usize,
}

/// Zone ranking entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRanking {
    pub zone_id: String,
    pub zone_name: String,
    pub average_rating: f64,
    pub total_feedback: usize,
}

/// Full dashboard response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub overview: Overview,
    /// Hotel-level stats (rating histogram + 7-day trend)
    pub hotel_stats: FeedbackStats,
    /// Per-zone stats for every zone of the primary hotel
    pub zone_stats: Vec<FeedbackStats>,
    /// Top 3 zones by average rating
    pub top_zones: Vec<ZoneRanking>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/dashboard - Aggregated analytics for the primary hotel
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<DashboardResponse>> {
    let store = state.store();
    let hotel_id = store
        .primary_hotel()
        .map(|h| h.id)
        .unwrap_or_else(|| "1".to_string());

    let feedback = store.feedback();
    let today = Local::now().date_naive();

    let hotel_stats = stats::summarize(&hotel_id, &feedback, today);

    let zones = query::filter_zones(&store.zones(), Some(&hotel_id));
    let zone_stats: Vec<FeedbackStats> = zones
        .iter()
        .map(|zone| stats::summarize_zone(&hotel_id, &zone.id, &feedback, today))
        .collect();

    // Rank zones by average rating, best first
    let mut rankings: Vec<ZoneRanking> = zone_stats
        .iter()
        .map(|s| ZoneRanking {
            zone_id: s.zone_id.clone().unwrap_or_default(),
            zone_name: store.zone_name(s.zone_id.as_deref().unwrap_or_default()),
            average_rating: s.average_rating,
            total_feedback: s.total_feedback,
        })
        .collect();
    rankings.sort_by(|a, b| {
        b.average_rating
            .partial_cmp(&a.average_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rankings.truncate(3);

    Ok(Json(DashboardResponse {
        overview: Overview {
            total_feedback: feedback.len(),
            average_rating: hotel_stats.average_rating,
            pending_alerts: store.pending_alert_count(),
        },
        hotel_stats,
        zone_stats,
        top_zones: rankings,
    }))
}
