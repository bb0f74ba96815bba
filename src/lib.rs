// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Daily balance leaderboard with rank movement against the previous day.

pub mod amount;
pub mod config;
pub mod date_keys;
pub mod error;
pub mod export;
pub mod format;
pub mod leaderboard;
pub mod models;
pub mod movement;
pub mod ranking;
pub mod snapshot;
pub mod source;
pub mod web;

pub use error::SnapshotError;
pub use format::{format_address, format_amount};
pub use models::{AnnotatedEntry, BalanceRecord, Movement, RankedEntry};
pub use movement::{annotate, annotate_with_amounts};
pub use ranking::build_ranking;
pub use snapshot::parse_snapshot;
