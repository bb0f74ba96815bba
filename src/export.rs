// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::{Context, Result};
use chrono::Local;
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::format::format_amount;
use crate::leaderboard::Leaderboard;

const HEADERS: [&str; 8] = [
    "Rank",
    "Address",
    "Amount",
    "Amount (Formatted)",
    "Previous Rank",
    "Movement",
    "Previous Amount",
    "Amount Change",
];

/// Write the leaderboard to `<dir>/ranking_<dateKey>_<timestamp>.csv`.
pub fn export_leaderboard_csv(leaderboard: &Leaderboard, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("ranking_{}_{}.csv", leaderboard.date_key, timestamp));

    let mut writer = Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    write_leaderboard(&mut writer, leaderboard)?;
    writer.flush()?;

    info!(
        "Exported {} entries to {}",
        leaderboard.entries.len(),
        path.display()
    );
    Ok(path)
}

fn write_leaderboard<W: std::io::Write>(
    writer: &mut Writer<W>,
    leaderboard: &Leaderboard,
) -> Result<()> {
    writer.write_record(HEADERS)?;

    for entry in &leaderboard.entries {
        writer.write_record(&[
            entry.rank.to_string(),
            entry.address.clone(),
            entry.amount.clone(),
            format_amount(&entry.amount),
            entry
                .previous_rank
                .map(|v| v.to_string())
                .unwrap_or_else(|| "NA".to_string()),
            entry.movement.to_string(),
            entry
                .previous_amount
                .clone()
                .unwrap_or_else(|| "NA".to_string()),
            entry
                .amount_change
                .clone()
                .unwrap_or_else(|| "NA".to_string()),
        ])?;
    }

    Ok(())
}
