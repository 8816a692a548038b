//! JSON request and response bodies.

use rankboard_types::{Page, RankedEntrant, Stats};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub rating: u16,
}

impl From<RankedEntrant> for LeaderboardEntry {
    fn from(entry: RankedEntrant) -> Self {
        Self {
            rank: entry.rank,
            username: entry.id.into_inner(),
            rating: entry.rating.value(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
    pub page: usize,
    pub limit: usize,
    pub total_users: usize,
    pub has_more: bool,
}

impl From<Page> for LeaderboardResponse {
    fn from(page: Page) -> Self {
        Self {
            entries: page.entries.into_iter().map(Into::into).collect(),
            page: page.page,
            limit: page.limit,
            total_users: page.total_count,
            has_more: page.has_more,
        }
    }
}

/// Query string of `GET /api/leaderboard`.
///
/// Kept as raw strings so malformed numbers fall back to defaults instead of
/// rejecting the request.
#[derive(Deserialize, Debug, Default)]
pub struct LeaderboardParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserRankResponse {
    pub username: String,
    pub rating: u16,
    pub rank: usize,
}

impl From<RankedEntrant> for UserRankResponse {
    fn from(entry: RankedEntrant) -> Self {
        Self {
            username: entry.id.into_inner(),
            rating: entry.rating.value(),
            rank: entry.rank,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UpdateScoreRequest {
    pub rating: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedRequest {
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<UserRankResponse>,
    pub count: usize,
}

/// Aggregate statistics. Extremes and mean are `null` while the registry is
/// empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatsResponse {
    pub total_users: usize,
    pub min_rating: Option<u16>,
    pub max_rating: Option<u16>,
    pub average_rating: Option<f64>,
}

impl StatsResponse {
    pub fn empty() -> Self {
        Self {
            total_users: 0,
            min_rating: None,
            max_rating: None,
            average_rating: None,
        }
    }
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            total_users: stats.total_count,
            min_rating: Some(stats.min_rating.value()),
            max_rating: Some(stats.max_rating.value()),
            average_rating: Some(stats.average_rating),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}
