// src/pipeline/mod.rs
use crate::error::FetchError;
use crate::fetch::{self, SourceConfig};
use crate::process::{self, table::TabularDataset};
use crate::schema::{normalize, CapabilitySet};
use crate::synth;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Which stage of the fallback chain produced the active dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PrimaryRemote,
    SecondaryRemote,
    Synthetic,
}

/// Display-only record of where the data came from, carried through
/// unchanged so a downgrade to synthetic data stays observable.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub kind: SourceKind,
    pub label: String,
}

/// The pipeline's result: normalized dataset, capability flags, and the
/// source that produced them. Read-only once materialized.
#[derive(Debug)]
pub struct Acquisition {
    pub dataset: TabularDataset,
    pub capabilities: CapabilitySet,
    pub source: SourceDescriptor,
}

/// Process-wide memoized acquisition. The mutex is held across the first
/// computation so concurrent first callers cannot trigger duplicate
/// fetches; everyone else gets the cached value.
static ACQUIRED: Lazy<Mutex<Option<Arc<Acquisition>>>> = Lazy::new(|| Mutex::new(None));

/// Acquire the survey dataset. Never fails: the remote chain degrades to
/// the synthetic generator. Computed at most once per process; subsequent
/// calls return the cached value.
pub fn acquire() -> Arc<Acquisition> {
    acquire_from(&SourceConfig::default())
}

/// As [`acquire`], against explicit endpoints. The first caller's config
/// wins; once the cache is populated the config is ignored.
pub fn acquire_from(config: &SourceConfig) -> Arc<Acquisition> {
    let mut slot = ACQUIRED.lock().unwrap();
    if let Some(acquisition) = slot.as_ref() {
        return Arc::clone(acquisition);
    }
    let acquisition = Arc::new(run(config));
    *slot = Some(Arc::clone(&acquisition));
    acquisition
}

/// Drop the cached acquisition so the next call recomputes. Test hook.
pub fn reset() {
    ACQUIRED.lock().unwrap().take();
}

/// One full acquisition: fallback chain, then normalization and capability
/// detection over whatever the chain produced.
fn run(config: &SourceConfig) -> Acquisition {
    let (mut dataset, kind, label) = fetch_dataset(config);

    normalize(&mut dataset);
    let capabilities = CapabilitySet::detect(&dataset);

    info!(
        source = %label,
        kind = ?kind,
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "acquisition complete"
    );

    Acquisition {
        dataset,
        capabilities,
        source: SourceDescriptor { kind, label },
    }
}

/// PRIMARY → SECONDARY → SYNTHETIC, each stage attempted at most once.
fn fetch_dataset(config: &SourceConfig) -> (TabularDataset, SourceKind, String) {
    let client = match fetch::client() {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "HTTP client unavailable, generating synthetic data");
            return synthetic();
        }
    };

    match primary(&client, config) {
        Ok((dataset, name)) => return (dataset, SourceKind::PrimaryRemote, name),
        Err(err) => warn!(error = %err, "primary source failed, trying fallback URL"),
    }

    match secondary(&client, config) {
        Ok((dataset, name)) => (dataset, SourceKind::SecondaryRemote, name),
        Err(err) => {
            warn!(error = %err, "fallback source failed, generating synthetic data");
            synthetic()
        }
    }
}

fn primary(client: &Client, config: &SourceConfig) -> Result<(TabularDataset, String), FetchError> {
    let raw = fetch::resolve_primary(client, config)?;
    let dataset = process::decode(&raw)?;
    Ok((dataset, raw.name))
}

/// Secondary-stage failures are all surfaced as the source being
/// unavailable, whatever went wrong underneath.
fn secondary(
    client: &Client,
    config: &SourceConfig,
) -> Result<(TabularDataset, String), FetchError> {
    let raw = fetch::resolve_secondary(client, config)
        .map_err(|e| FetchError::SourceUnavailable(e.to_string()))?;
    let dataset =
        process::decode(&raw).map_err(|e| FetchError::SourceUnavailable(e.to_string()))?;
    Ok((dataset, raw.name))
}

fn synthetic() -> (TabularDataset, SourceKind, String) {
    let dataset = synth::generate(synth::DEFAULT_ROW_COUNT, None);
    (dataset, SourceKind::Synthetic, "sample_data.csv".to_string())
}
