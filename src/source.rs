// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::error::{Result, SnapshotError};

/// Where daily snapshot payloads come from.
///
/// Implementations return the raw payload text for a `YYYYMMDD` key or a
/// `FetchFailure`. They neither retry nor cache.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self, date_key: &str) -> Result<String>;
}

/// `<base>/<dateKey>.json`, tolerating a trailing slash on `base`.
pub fn snapshot_location(base: &str, date_key: &str) -> String {
    format!("{}/{}.json", base.trim_end_matches('/'), date_key)
}

/// Fetches snapshots from a static web host.
pub struct HttpSnapshotSource {
    client: Client,
    base_url: String,
}

impl HttpSnapshotSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch(&self, date_key: &str) -> Result<String> {
        let url = snapshot_location(&self.base_url, date_key);
        debug!("Fetching snapshot {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SnapshotError::fetch(date_key, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Failed to fetch {}: {}", url, status);
            return Err(SnapshotError::fetch(date_key, format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| SnapshotError::fetch(date_key, e))
    }
}

/// Reads snapshots from a local directory laid out like the static host.
pub struct DirSnapshotSource {
    dir: PathBuf,
}

impl DirSnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SnapshotSource for DirSnapshotSource {
    async fn fetch(&self, date_key: &str) -> Result<String> {
        let path = self.dir.join(format!("{}.json", date_key));
        debug!("Reading snapshot {}", path.display());

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            debug!("Failed to read {}: {}", path.display(), e);
            SnapshotError::fetch(date_key, e)
        })
    }
}

/// Pick a source for the configured base: `http(s)://` URLs go over the
/// network, anything else is treated as a directory.
pub fn source_for_base(base: &str, timeout: Duration) -> anyhow::Result<Arc<dyn SnapshotSource>> {
    if is_remote(base) {
        Ok(Arc::new(HttpSnapshotSource::new(base, timeout)?))
    } else {
        Ok(Arc::new(DirSnapshotSource::new(base)))
    }
}

pub fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}
