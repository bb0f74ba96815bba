// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use thiserror::Error;

/// Errors raised while obtaining a snapshot for a date key.
///
/// `FetchFailure` and `MalformedPayload` both mean "no data for this date"
/// to the presentation layer but are kept apart for diagnostics.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to fetch snapshot {date_key}: {reason}")]
    FetchFailure { date_key: String, reason: String },

    #[error("malformed snapshot payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("invalid date key '{0}', expected YYYYMMDD")]
    InvalidDateKey(String),
}

impl SnapshotError {
    pub fn fetch(date_key: &str, reason: impl ToString) -> Self {
        SnapshotError::FetchFailure {
            date_key: date_key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the error means the snapshot is simply not available.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            SnapshotError::FetchFailure { .. } | SnapshotError::MalformedPayload { .. }
        )
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::MalformedPayload {
            reason: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
