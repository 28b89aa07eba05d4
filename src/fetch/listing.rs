use crate::error::FetchError;
use crate::fetch::SourceFormat;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

/// File extensions the resolver recognizes as tabular data, in the order
/// they are tried against an entry name.
static TABULAR_EXTENSIONS: &[(&str, SourceFormat)] = &[
    (".csv", SourceFormat::Csv),
    (".xlsx", SourceFormat::Spreadsheet),
    (".xls", SourceFormat::Spreadsheet),
];

/// One entry of the repository contents listing. Directories carry no
/// download URL, hence the Option.
#[derive(Debug, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Fetch and deserialize the repository file listing. Transport errors,
/// non-2xx statuses and undecodable listing bodies all count as the source
/// being unavailable.
pub fn fetch_listing(client: &Client, url: &str) -> Result<Vec<ListingEntry>, FetchError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::SourceUnavailable(format!("GET {url}: {e}")))?
        .error_for_status()
        .map_err(|e| FetchError::SourceUnavailable(format!("GET {url}: {e}")))?;

    let entries: Vec<ListingEntry> = response
        .json()
        .map_err(|e| FetchError::SourceUnavailable(format!("decoding listing from {url}: {e}")))?;

    debug!(url, entries = entries.len(), "fetched listing");
    Ok(entries)
}

/// Pick the first listing entry with a recognized tabular extension, in
/// listing order. No further tie-break.
pub fn first_tabular(entries: &[ListingEntry]) -> Option<(&ListingEntry, SourceFormat)> {
    entries
        .iter()
        .find_map(|entry| format_for_name(&entry.name).map(|format| (entry, format)))
}

/// Detect the decode format from a file name, if it is one we handle.
pub fn format_for_name(name: &str) -> Option<SourceFormat> {
    let lower = name.to_lowercase();
    TABULAR_EXTENSIONS
        .iter()
        .find(|(ext, _)| lower.ends_with(ext))
        .map(|&(_, format)| format)
}
