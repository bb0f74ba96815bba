// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use std::sync::Arc;

use crate::config::Config;
use crate::date_keys::Clock;
use crate::source::SnapshotSource;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SnapshotSource>,
    pub clock: Arc<dyn Clock>,
    pub config: Config,
}

impl AppState {
    pub fn new(source: Arc<dyn SnapshotSource>, clock: Arc<dyn Clock>, config: Config) -> Self {
        Self {
            source,
            clock,
            config,
        }
    }
}
