// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Property tests for ranking, movement and formatting

use proptest::prelude::*;
use std::collections::HashMap;

use root_ranking::amount::parse_amount;
use root_ranking::models::{BalanceRecord, Movement};
use root_ranking::{annotate, build_ranking, format_address, format_amount};

fn amount_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..1_000_000).prop_map(|n| n.to_string()),
        (0u64..1_000_000, 0u32..100_000).prop_map(|(i, f)| format!("{}.{:05}", i, f)),
        Just("garbage".to_string()),
    ]
}

fn records_strategy() -> impl Strategy<Value = Vec<BalanceRecord>> {
    prop::collection::vec(amount_strategy(), 0..40).prop_map(|amounts| {
        amounts
            .into_iter()
            .enumerate()
            .map(|(i, amount)| BalanceRecord::new(format!("addr{}", i), amount))
            .collect()
    })
}

proptest! {
    #[test]
    fn ranks_are_contiguous(records in records_strategy()) {
        let n = records.len();
        let ranking = build_ranking(records);
        let ranks: Vec<usize> = ranking.iter().map(|e| e.rank).collect();
        prop_assert_eq!(ranks, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn amounts_are_non_increasing(records in records_strategy()) {
        let ranking = build_ranking(records);
        for pair in ranking.windows(2) {
            prop_assert!(parse_amount(&pair[0].amount) >= parse_amount(&pair[1].amount));
        }
    }

    #[test]
    fn equal_amounts_keep_input_order(records in records_strategy()) {
        // addresses encode input position
        let position = |address: &str| address[4..].parse::<usize>().unwrap();
        let ranking = build_ranking(records);
        for pair in ranking.windows(2) {
            if parse_amount(&pair[0].amount) == parse_amount(&pair[1].amount) {
                prop_assert!(position(&pair[0].address) < position(&pair[1].address));
            }
        }
    }

    #[test]
    fn movement_matches_rank_delta(
        current in records_strategy(),
        previous in records_strategy(),
    ) {
        let current = build_ranking(current);
        let previous = build_ranking(previous);
        let previous_ranks: HashMap<&str, usize> =
            previous.iter().map(|e| (e.address.as_str(), e.rank)).collect();

        let annotated = annotate(&current, &previous);
        prop_assert_eq!(annotated.len(), current.len());

        for (entry, ranked) in annotated.iter().zip(current.iter()) {
            prop_assert_eq!(&entry.address, &ranked.address);
            match previous_ranks.get(entry.address.as_str()) {
                None => prop_assert_eq!(entry.movement, Movement::New),
                Some(&before) => {
                    prop_assert_eq!(entry.previous_rank, Some(before));
                    let delta = before as i64 - entry.rank as i64;
                    let expected = if delta > 0 {
                        format!("↑{}", delta)
                    } else if delta < 0 {
                        format!("↓{}", -delta)
                    } else {
                        "-".to_string()
                    };
                    prop_assert_eq!(entry.movement.to_string(), expected);
                }
            }
        }
    }

    #[test]
    fn formatted_amount_round_trips_integer_part(i in 0u64..u64::MAX) {
        let formatted = format_amount(&i.to_string());
        prop_assert_eq!(formatted.replace(',', ""), i.to_string());
        prop_assert!(!formatted.contains('.'));
    }

    #[test]
    fn formatted_fraction_has_at_most_four_digits(i in 0u64..1_000_000, f in 0u32..1_000_000) {
        let formatted = format_amount(&format!("{}.{:06}", i, f));
        if let Some((_, fraction)) = formatted.split_once('.') {
            prop_assert!(!fraction.is_empty() && fraction.len() <= 4);
            prop_assert!(!fraction.ends_with('0'));
        }
    }

    #[test]
    fn long_addresses_shorten_to_thirteen_chars(address in "[1-9A-HJ-NP-Za-km-z]{11,64}") {
        let formatted = format_address(&address);
        prop_assert_eq!(formatted.chars().count(), 13);
        prop_assert!(formatted.starts_with(&address[..6]));
        prop_assert!(formatted.ends_with(&address[address.len() - 4..]));
    }

    #[test]
    fn short_addresses_are_unchanged(address in "[a-z0-9]{0,10}") {
        prop_assert_eq!(format_address(&address), address);
    }
}
