// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::date_keys::current_date_key;
use crate::error::SnapshotError;
use crate::leaderboard::load_leaderboard;
use crate::movement::AnnotateOptions;
use crate::web::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RankingQuery {
    /// Include previous amounts and amount changes.
    #[serde(default)]
    pub amounts: bool,
}

/// Leaderboard for today according to the server clock
pub async fn get_today_ranking(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let date_key = current_date_key(state.clock.as_ref());
    ranking_response(&state, &date_key, &query).await
}

/// Leaderboard for a specific `YYYYMMDD` date key
pub async fn get_ranking(
    State(state): State<AppState>,
    Path(date_key): Path<String>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    ranking_response(&state, &date_key, &query).await
}

async fn ranking_response(
    state: &AppState,
    date_key: &str,
    query: &RankingQuery,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let options = AnnotateOptions {
        include_amounts: query.amounts,
    };

    let leaderboard = load_leaderboard(state.source.as_ref(), date_key, options)
        .await
        .map_err(|e| {
            warn!("No leaderboard for {}: {}", date_key, e);
            status_for(&e)
        })?;

    Ok(Json(json!({
        "dateKey": leaderboard.date_key,
        "previousDateKey": leaderboard.previous_date_key,
        "currentAvailable": leaderboard.current_available,
        "previousAvailable": leaderboard.previous_available,
        "entries": leaderboard.entries,
        "rows": leaderboard.rows(),
    })))
}

fn status_for(error: &SnapshotError) -> StatusCode {
    match error {
        SnapshotError::InvalidDateKey(_) => StatusCode::BAD_REQUEST,
        SnapshotError::FetchFailure { .. } | SnapshotError::MalformedPayload { .. } => {
            StatusCode::NOT_FOUND
        }
    }
}
