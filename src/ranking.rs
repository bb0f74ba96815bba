// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use std::cmp::Reverse;

use crate::amount::parse_amount;
use crate::models::{BalanceRecord, RankedEntry};

/// Rank records by amount, largest first.
///
/// The sort is stable: records with equal amounts keep their input order and
/// receive distinct consecutive ranks. Nothing is dropped or deduplicated.
pub fn build_ranking(mut records: Vec<BalanceRecord>) -> Vec<RankedEntry> {
    records.sort_by_cached_key(|record| Reverse(parse_amount(&record.amount)));

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| RankedEntry {
            address: record.address,
            amount: record.amount,
            rank: index + 1,
        })
        .collect()
}
