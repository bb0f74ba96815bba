// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use std::collections::HashMap;

use crate::amount::{parse_amount, to_plain_string};
use crate::models::{AnnotatedEntry, Movement, RankedEntry};

/// Optional enrichment for [`annotate_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotateOptions {
    /// Fill `previous_amount` and `amount_change` for returning accounts.
    pub include_amounts: bool,
}

/// Annotate the current ranking with rank movement against the previous one.
pub fn annotate(current: &[RankedEntry], previous: &[RankedEntry]) -> Vec<AnnotatedEntry> {
    annotate_with(current, previous, AnnotateOptions::default())
}

/// Like [`annotate`], also reporting the previous amount and the change.
pub fn annotate_with_amounts(
    current: &[RankedEntry],
    previous: &[RankedEntry],
) -> Vec<AnnotatedEntry> {
    annotate_with(
        current,
        previous,
        AnnotateOptions {
            include_amounts: true,
        },
    )
}

/// Output has the same length and order as `current`. Addresses that only
/// appear in `previous` are not reported. When `previous` lists an address
/// more than once, its last occurrence wins.
pub fn annotate_with(
    current: &[RankedEntry],
    previous: &[RankedEntry],
    options: AnnotateOptions,
) -> Vec<AnnotatedEntry> {
    let previous_by_address: HashMap<&str, &RankedEntry> = previous
        .iter()
        .map(|entry| (entry.address.as_str(), entry))
        .collect();

    current
        .iter()
        .map(|entry| {
            let before = previous_by_address.get(entry.address.as_str()).copied();

            let movement = match before {
                Some(prev) => Movement::from_ranks(prev.rank, entry.rank),
                None => Movement::New,
            };

            let (previous_amount, amount_change) = match before {
                Some(prev) if options.include_amounts => (
                    Some(prev.amount.clone()),
                    Some(amount_change(&prev.amount, &entry.amount)),
                ),
                _ => (None, None),
            };

            AnnotatedEntry {
                address: entry.address.clone(),
                amount: entry.amount.clone(),
                rank: entry.rank,
                previous_rank: before.map(|prev| prev.rank),
                movement,
                previous_amount,
                amount_change,
            }
        })
        .collect()
}

/// `current - previous` as a plain decimal string without trailing zeros.
fn amount_change(previous: &str, current: &str) -> String {
    to_plain_string(&(parse_amount(current) - parse_amount(previous)))
}
