// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;
use crate::models::BalanceRecord;

/// A daily snapshot file: `{ "data": [ { address, balance }, ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotPayload {
    pub data: Vec<SnapshotItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub address: String,
    pub balance: Balance,
}

/// Balance object of a snapshot item.
///
/// Only `freeFormatted` is consumed; `free`, `reserved`, `frozen` and the
/// other fields are kept untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    #[serde(rename = "freeFormatted")]
    pub free_formatted: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Turn a decoded payload into balance records, using `freeFormatted`
/// verbatim as the amount.
pub fn parse_payload(payload: SnapshotPayload) -> Vec<BalanceRecord> {
    payload
        .data
        .into_iter()
        .map(|item| BalanceRecord {
            address: item.address,
            amount: item.balance.free_formatted,
        })
        .collect()
}

/// Decode raw snapshot JSON into balance records.
///
/// Fails with `MalformedPayload` when the text does not have the expected
/// list-of-items shape.
pub fn parse_snapshot(raw: &str) -> Result<Vec<BalanceRecord>> {
    let payload: SnapshotPayload = serde_json::from_str(raw)?;
    Ok(parse_payload(payload))
}
