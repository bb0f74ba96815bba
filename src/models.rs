// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// One account balance from a daily snapshot.
///
/// `amount` stays a decimal string so that precision survives the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub address: String,
    pub amount: String,
}

impl BalanceRecord {
    pub fn new(address: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
        }
    }
}

/// A balance record with its 1-based position in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub address: String,
    pub amount: String,
    pub rank: usize,
}

/// Rank change of an account between the previous and current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Address absent from the previous snapshot.
    New,
    Unchanged,
    /// Moved toward rank 1 by the given number of places.
    Up(usize),
    Down(usize),
}

impl Movement {
    /// Classify `previous_rank - current_rank`.
    pub fn from_ranks(previous_rank: usize, current_rank: usize) -> Self {
        if previous_rank > current_rank {
            Movement::Up(previous_rank - current_rank)
        } else if previous_rank < current_rank {
            Movement::Down(current_rank - previous_rank)
        } else {
            Movement::Unchanged
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::New => write!(f, "NEW"),
            Movement::Unchanged => write!(f, "-"),
            Movement::Up(k) => write!(f, "↑{}", k),
            Movement::Down(k) => write!(f, "↓{}", k),
        }
    }
}

impl Serialize for Movement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A ranked entry annotated against the previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedEntry {
    pub address: String,
    pub amount: String,
    pub rank: usize,
    pub previous_rank: Option<usize>,
    pub movement: Movement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_change: Option<String>,
}
