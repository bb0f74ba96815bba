// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use chrono::{Days, Local, NaiveDate};

use crate::error::{Result, SnapshotError};

const DATE_KEY_FORMAT: &str = "%Y%m%d";

/// Source of "today" for date key computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the process's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one calendar date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as `YYYYMMDD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYYMMDD` key. Anything other than eight digits forming a real
/// calendar date is rejected.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    if key.len() != 8 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SnapshotError::InvalidDateKey(key.to_string()));
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|_| SnapshotError::InvalidDateKey(key.to_string()))
}

pub fn current_date_key(clock: &dyn Clock) -> String {
    date_key(clock.today())
}

pub fn previous_date_key(clock: &dyn Clock) -> String {
    date_key(day_before(clock.today()))
}

/// Key of the day preceding an arbitrary date key.
pub fn previous_date_key_of(key: &str) -> Result<String> {
    parse_date_key(key).map(|date| date_key(day_before(date)))
}

fn day_before(date: NaiveDate) -> NaiveDate {
    // Only NaiveDate::MIN has no predecessor.
    date.checked_sub_days(Days::new(1)).unwrap_or(date)
}
