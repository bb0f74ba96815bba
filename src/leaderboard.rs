// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::Serialize;
use tracing::{info, warn};

use crate::date_keys::previous_date_key_of;
use crate::error::Result;
use crate::format::{format_address, format_amount};
use crate::models::{AnnotatedEntry, BalanceRecord};
use crate::movement::{AnnotateOptions, annotate_with};
use crate::ranking::build_ranking;
use crate::snapshot::parse_snapshot;
use crate::source::SnapshotSource;

/// The ranking for one day, annotated against the day before.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Day the entries were ranked for.
    pub date_key: String,
    /// Day the entries were compared with. When `current_available` is false
    /// nothing was compared and this is only the day before `date_key`.
    pub previous_date_key: String,
    /// False when the requested day had no snapshot and the previous day's
    /// ranking is shown instead.
    pub current_available: bool,
    /// False when every entry is `NEW` because nothing could be compared.
    pub previous_available: bool,
    pub entries: Vec<AnnotatedEntry>,
}

/// An entry with its fields rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub rank: usize,
    pub movement: String,
    pub address: String,
    pub amount: String,
    pub previous_amount: Option<String>,
    pub amount_change: Option<String>,
}

impl From<&AnnotatedEntry> for DisplayRow {
    fn from(entry: &AnnotatedEntry) -> Self {
        Self {
            rank: entry.rank,
            movement: entry.movement.to_string(),
            address: format_address(&entry.address),
            amount: format_amount(&entry.amount),
            previous_amount: entry.previous_amount.as_deref().map(format_amount),
            amount_change: entry.amount_change.as_deref().map(format_amount),
        }
    }
}

impl Leaderboard {
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.entries.iter().map(DisplayRow::from).collect()
    }

    pub fn heading(&self) -> String {
        if self.current_available {
            format!(
                "Ranking for {} (compared with {})",
                self.date_key, self.previous_date_key
            )
        } else {
            format!("Ranking for {}", self.date_key)
        }
    }

    /// Warnings about missing snapshots, empty when both days were ranked.
    pub fn notices(&self) -> Vec<String> {
        if !self.current_available {
            vec![format!(
                "No snapshot for the requested day, showing {} instead with every entry as NEW",
                self.date_key
            )]
        } else if !self.previous_available {
            vec![format!(
                "No snapshot for {}, every entry is shown as NEW",
                self.previous_date_key
            )]
        } else {
            Vec::new()
        }
    }
}

/// Build the leaderboard for `date_key`.
///
/// Both snapshots are fetched concurrently. A missing or malformed previous
/// snapshot marks every entry `NEW`; a missing current snapshot falls back to
/// ranking the previous day alone. Only when neither is available is the
/// current day's error returned.
pub async fn load_leaderboard(
    source: &dyn SnapshotSource,
    date_key: &str,
    options: AnnotateOptions,
) -> Result<Leaderboard> {
    let previous_key = previous_date_key_of(date_key)?;

    let (current, previous) = tokio::join!(
        load_records(source, date_key),
        load_records(source, &previous_key)
    );

    match (current, previous) {
        (Ok(current), previous) => {
            let previous_available = previous.is_ok();
            let previous_ranking = previous.map(build_ranking).unwrap_or_default();
            let current_ranking = build_ranking(current);
            info!(
                "Ranked {} accounts for {} against {} ({} accounts)",
                current_ranking.len(),
                date_key,
                previous_key,
                previous_ranking.len()
            );

            Ok(Leaderboard {
                date_key: date_key.to_string(),
                previous_date_key: previous_key,
                current_available: true,
                previous_available,
                entries: annotate_with(&current_ranking, &previous_ranking, options),
            })
        }
        (Err(e), Ok(previous)) => {
            warn!(
                "No snapshot for {} ({}), showing {} instead",
                date_key, e, previous_key
            );
            let ranking = build_ranking(previous);
            let before_previous = previous_date_key_of(&previous_key)?;

            Ok(Leaderboard {
                date_key: previous_key,
                previous_date_key: before_previous,
                current_available: false,
                previous_available: false,
                entries: annotate_with(&ranking, &[], options),
            })
        }
        (Err(e), Err(_)) => Err(e),
    }
}

async fn load_records(source: &dyn SnapshotSource, date_key: &str) -> Result<Vec<BalanceRecord>> {
    let result = match source.fetch(date_key).await {
        Ok(raw) => parse_snapshot(&raw),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        warn!("Snapshot {} unavailable: {}", date_key, e);
    }
    result
}
