//! Route handlers.

use crate::api::{
    HealthResponse, LeaderboardParams, LeaderboardResponse, MessageResponse, SearchParams,
    SearchResponse, SeedRequest, SeedResponse, StatsResponse, UpdateScoreRequest,
    UserRankResponse,
};
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Json,
};
use rankboard_sim::SeedOptions;
use rankboard_store::{Registry, StoreError, DEFAULT_SEARCH_LIMIT};
use rankboard_types::{PageRequest, DEFAULT_PAGE_LIMIT};
use std::sync::Arc;
use tracing::info;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Largest `count` accepted by `POST /api/seed`.
pub const MAX_SEED_COUNT: usize = 1_000_000;

/// Parses an optional query value, treating garbage as `0` so that the page
/// normalization rules pick the default.
fn int_param(raw: Option<&str>, default: i64) -> i64 {
    raw.map_or(default, |s| s.trim().parse().unwrap_or(0))
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        store: "in-memory".to_string(),
    })
}

/// `POST /api/seed`
pub(crate) async fn seed(
    State(registry): State<Arc<Registry>>,
    body: Result<Json<SeedRequest>, JsonRejection>,
) -> ApiResult<SeedResponse> {
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    if req.count == 0 {
        return Err(ApiError::InvalidRequest("count must be at least 1".to_string()));
    }
    if req.count > MAX_SEED_COUNT {
        return Err(ApiError::InvalidRequest(format!(
            "count must be at most {MAX_SEED_COUNT}"
        )));
    }

    // Large seeds would stall the async workers.
    let count = req.count;
    tokio::task::spawn_blocking(move || {
        rankboard_sim::seed(&registry, count, &SeedOptions::default())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("seed task failed: {e}")))??;

    Ok(Json(SeedResponse {
        message: "Data seeded successfully".to_string(),
        count,
    }))
}

/// `GET /api/leaderboard?page=1&limit=50`
pub(crate) async fn leaderboard(
    State(registry): State<Arc<Registry>>,
    Query(params): Query<LeaderboardParams>,
) -> Json<LeaderboardResponse> {
    let request = PageRequest::new(
        int_param(params.page.as_deref(), 1),
        int_param(params.limit.as_deref(), DEFAULT_PAGE_LIMIT as i64),
    );
    Json(registry.get_page(request).into())
}

/// `GET /api/users/{username}`
pub(crate) async fn user_rank(
    State(registry): State<Arc<Registry>>,
    Path(username): Path<String>,
) -> ApiResult<UserRankResponse> {
    Ok(Json(registry.get_rank(&username)?.into()))
}

/// `POST /api/users/{username}/score`
pub(crate) async fn update_score(
    State(registry): State<Arc<Registry>>,
    Path(username): Path<String>,
    body: Result<Json<UpdateScoreRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(req) = body.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let previous = registry.update_rating(&username, req.rating)?;
    info!("Updated {username}: {previous} -> {}", req.rating);

    Ok(Json(MessageResponse {
        message: "Score updated successfully".to_string(),
    }))
}

/// `GET /api/search?q=user_12`
pub(crate) async fn search(
    State(registry): State<Arc<Registry>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<SearchResponse> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;
    let results: Vec<UserRankResponse> = registry
        .search(&query, DEFAULT_SEARCH_LIMIT)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(SearchResponse {
        count: results.len(),
        results,
    }))
}

/// `GET /api/stats`
pub(crate) async fn stats(State(registry): State<Arc<Registry>>) -> ApiResult<StatsResponse> {
    match registry.get_stats() {
        Ok(stats) => Ok(Json(stats.into())),
        Err(StoreError::EmptyRegistry) => Ok(Json(StatsResponse::empty())),
        Err(e) => Err(e.into()),
    }
}
