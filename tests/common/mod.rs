// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Common test utilities and helpers
//!
//! - Snapshot payload generation in the static-hosting file format
//! - Snapshot files on disk
//! - An in-memory snapshot source

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use root_ranking::error::SnapshotError;
use root_ranking::models::BalanceRecord;
use root_ranking::source::SnapshotSource;

/// Build a snapshot payload with every balance field the real files carry.
pub fn snapshot_json(accounts: &[(&str, &str)]) -> String {
    let data: Vec<serde_json::Value> = accounts
        .iter()
        .map(|(address, amount)| {
            json!({
                "address": address,
                "balance": {
                    "free": 0,
                    "freeFormatted": amount,
                    "reserved": 0,
                    "reservedFormatted": "0",
                    "frozen": 0,
                    "frozenFormatted": null,
                    "miscFrozen": null,
                    "miscFrozenFormatted": null,
                    "feeFrozen": null,
                    "feeFrozenFormatted": null
                }
            })
        })
        .collect();

    json!({ "data": data }).to_string()
}

pub fn records(accounts: &[(&str, &str)]) -> Vec<BalanceRecord> {
    accounts
        .iter()
        .map(|(address, amount)| BalanceRecord::new(*address, *amount))
        .collect()
}

/// Write `<dir>/<date_key>.json`.
pub fn write_snapshot(dir: &Path, date_key: &str, accounts: &[(&str, &str)]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", date_key));
    std::fs::write(&path, snapshot_json(accounts))?;
    Ok(path)
}

/// Snapshot source backed by a map of date key to raw payload.
#[derive(Default)]
pub struct MemorySource {
    payloads: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, date_key: &str, accounts: &[(&str, &str)]) -> Self {
        self.payloads
            .insert(date_key.to_string(), snapshot_json(accounts));
        self
    }

    pub fn with_raw(mut self, date_key: &str, raw: &str) -> Self {
        self.payloads.insert(date_key.to_string(), raw.to_string());
        self
    }
}

#[async_trait]
impl SnapshotSource for MemorySource {
    async fn fetch(&self, date_key: &str) -> Result<String, SnapshotError> {
        self.payloads
            .get(date_key)
            .cloned()
            .ok_or_else(|| SnapshotError::fetch(date_key, "HTTP 404 Not Found"))
    }
}
