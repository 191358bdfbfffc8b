//! Zone Model

use serde::{Deserialize, Serialize};

/// Physical area of a hotel that feedback is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Restaurant,
    Room,
    Lobby,
    Pool,
    Spa,
    Gym,
    Other,
}

/// Zone entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
}

/// Create zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreate {
    pub hotel_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
}
