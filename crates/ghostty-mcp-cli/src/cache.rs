//! Version-keyed cache over `+show-config --default --docs`.
//!
//! The full documentation dump is by far the slowest ghostty invocation, and
//! it only changes when ghostty itself is upgraded. The cache keeps one
//! `(version, entries)` slot and reuses it while `ghostty --version` reports
//! the same first line.
//!
//! Lifecycle: created once at server start, mutated only by [`DocCache::get`],
//! never torn down or persisted. Concurrent callers that both see a stale
//! version may both fetch; the last write wins and no caller ever observes a
//! version paired with another version's entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use ghostty_mcp_core::{ConfigDocEntry, Error, Result};
use ghostty_mcp_parser::parse_config_docs;

use crate::exec::CliInvoker;

/// Arguments of the version probe.
pub const VERSION_ARGS: &[&str] = &["--version"];

/// Arguments of the documentation fetch.
pub const DOCS_ARGS: &[&str] = &["+show-config", "--default", "--docs"];

/// Cached documentation and the version it was fetched for.
#[derive(Debug, Clone)]
struct CachedDocs {
    version: String,
    entries: Arc<Vec<ConfigDocEntry>>,
}

/// Cache of parsed config documentation keyed by ghostty version.
pub struct DocCache<I> {
    invoker: Arc<I>,
    probe_timeout: Duration,
    fetch_timeout: Duration,
    slot: RwLock<Option<CachedDocs>>,
}

impl<I: CliInvoker> DocCache<I> {
    /// Create an empty cache using default timeouts (10s probe, 30s fetch).
    pub fn new(invoker: Arc<I>) -> Self {
        Self {
            invoker,
            probe_timeout: Duration::from_secs(10),
            fetch_timeout: Duration::from_secs(30),
            slot: RwLock::new(None),
        }
    }

    /// Set the version probe and documentation fetch timeouts.
    pub fn with_timeouts(mut self, probe_timeout: Duration, fetch_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Return the parsed config documentation, fetching it only when the
    /// ghostty version changed or nothing usable is cached.
    ///
    /// A failed probe or fetch returns [`Error::Fetch`] and leaves the cache
    /// as it was.
    pub async fn get(&self) -> Result<Arc<Vec<ConfigDocEntry>>> {
        let version = self.probe_version().await?;

        if let Some(entries) = self.cached_entries(&version).await {
            debug!(
                "Config docs cache hit for '{}' ({} entries)",
                version,
                entries.len()
            );
            return Ok(entries);
        }

        info!("Loading config docs for '{}'", version);
        let output = self
            .invoker
            .invoke(to_args(DOCS_ARGS), self.fetch_timeout)
            .await;
        if !output.success() {
            warn!(
                "Config docs fetch failed with exit code {}",
                output.exit_code
            );
            return Err(Error::fetch("load config docs", output.stderr));
        }

        let entries = Arc::new(parse_config_docs(&output.stdout));
        info!("Cached {} config docs entries for '{}'", entries.len(), version);

        *self.slot.write().await = Some(CachedDocs {
            version,
            entries: Arc::clone(&entries),
        });

        Ok(entries)
    }

    /// Version the cached entries belong to, if anything is cached.
    pub async fn cached_version(&self) -> Option<String> {
        self.slot
            .read()
            .await
            .as_ref()
            .map(|cached| cached.version.clone())
    }

    /// Fingerprint: first line of `ghostty --version`, trimmed.
    async fn probe_version(&self) -> Result<String> {
        let output = self
            .invoker
            .invoke(to_args(VERSION_ARGS), self.probe_timeout)
            .await;
        if !output.success() {
            warn!("Version probe failed with exit code {}", output.exit_code);
            return Err(Error::fetch("probe ghostty version", output.stderr));
        }
        Ok(output.stdout.lines().next().unwrap_or("").trim().to_string())
    }

    async fn cached_entries(&self, version: &str) -> Option<Arc<Vec<ConfigDocEntry>>> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|cached| cached.version == version && !cached.entries.is_empty())
            .map(|cached| Arc::clone(&cached.entries))
    }
}

fn to_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}
