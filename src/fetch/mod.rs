// src/fetch/mod.rs
pub mod content;
pub mod listing;

use crate::error::FetchError;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;

/// Upstream endpoints of the acquisition chain. The defaults point at the
/// survey repository's contents listing and the known fallback workbook;
/// tests point both at a local server.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub listing_url: String,
    pub fallback_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url:
                "https://api.github.com/repos/UktambekA/Data-Professional-Survey/contents"
                    .to_string(),
            fallback_url:
                "https://raw.githubusercontent.com/AlexTheAnalyst/Power-BI/main/Power%20BI%20-%20Final%20Project.xlsx"
                    .to_string(),
        }
    }
}

/// How a fetched payload should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Spreadsheet,
}

/// A fetched payload plus its declared format. Lives only until it is
/// decoded into a dataset.
#[derive(Debug)]
pub struct RawSource {
    pub name: String,
    pub format: SourceFormat,
    pub bytes: Vec<u8>,
}

/// Build the blocking HTTP client. Requests get a bounded timeout, and the
/// GitHub API requires a User-Agent header.
pub fn client() -> Result<Client, FetchError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("surveyscraper/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::SourceUnavailable(format!("building HTTP client: {e}")))
}

/// Resolve the primary source: query the repository listing, pick the first
/// tabular file in listing order, and fetch its content. No retries; any
/// failure falls through to the caller's next stage.
pub fn resolve_primary(client: &Client, config: &SourceConfig) -> Result<RawSource, FetchError> {
    let entries = listing::fetch_listing(client, &config.listing_url)?;

    let (entry, format) = listing::first_tabular(&entries).ok_or_else(|| {
        FetchError::SourceUnavailable(format!(
            "no tabular file among {} listing entries",
            entries.len()
        ))
    })?;

    let url = entry.download_url.as_deref().ok_or_else(|| {
        FetchError::SourceUnavailable(format!("listing entry `{}` has no download URL", entry.name))
    })?;

    info!(name = %entry.name, "fetching primary source");
    let bytes = content::download(client, url)?;

    Ok(RawSource {
        name: entry.name.clone(),
        format,
        bytes,
    })
}

/// Resolve the secondary source: one fixed URL, always decoded as a
/// spreadsheet.
pub fn resolve_secondary(client: &Client, config: &SourceConfig) -> Result<RawSource, FetchError> {
    info!(url = %config.fallback_url, "fetching fallback source");
    let bytes = content::download(client, &config.fallback_url)?;

    Ok(RawSource {
        name: content::file_name_of(&config.fallback_url),
        format: SourceFormat::Spreadsheet,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The library is blocking, so the wiremock server runs on a manually
    // held runtime and requests are issued from the test thread.
    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Runtime::new().unwrap()
    }

    fn listing_json(server_uri: &str) -> serde_json::Value {
        serde_json::json!([
            { "name": "README.md", "download_url": format!("{server_uri}/README.md") },
            { "name": "survey.csv", "download_url": format!("{server_uri}/survey.csv") },
            { "name": "extra.xlsx", "download_url": format!("{server_uri}/extra.xlsx") },
        ])
    }

    #[test]
    fn primary_selects_first_tabular_entry_in_listing_order() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());

        rt.block_on(async {
            Mock::given(method("GET"))
                .and(path("/contents"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(listing_json(&server.uri())),
                )
                .mount(&server)
                .await;
            Mock::given(method("GET"))
                .and(path("/survey.csv"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_raw("Role,Salary\nData Analyst,70000\n", "text/csv"),
                )
                .mount(&server)
                .await;
        });

        let config = SourceConfig {
            listing_url: format!("{}/contents", server.uri()),
            fallback_url: format!("{}/fallback.xlsx", server.uri()),
        };
        let raw = resolve_primary(&client().unwrap(), &config).unwrap();

        assert_eq!(raw.name, "survey.csv");
        assert_eq!(raw.format, SourceFormat::Csv);
        assert!(!raw.bytes.is_empty());
    }

    #[test]
    fn primary_fails_on_non_2xx_listing() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());

        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/contents"))
                .respond_with(ResponseTemplate::new(500))
                .mount(&server),
        );

        let config = SourceConfig {
            listing_url: format!("{}/contents", server.uri()),
            fallback_url: format!("{}/fallback.xlsx", server.uri()),
        };
        let err = resolve_primary(&client().unwrap(), &config).unwrap_err();
        assert!(matches!(err, FetchError::SourceUnavailable(_)));
    }

    #[test]
    fn primary_fails_on_undecodable_listing() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());

        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/contents"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_raw("<html>nope</html>", "text/html"),
                )
                .mount(&server),
        );

        let config = SourceConfig {
            listing_url: format!("{}/contents", server.uri()),
            fallback_url: format!("{}/fallback.xlsx", server.uri()),
        };
        let err = resolve_primary(&client().unwrap(), &config).unwrap_err();
        assert!(matches!(err, FetchError::SourceUnavailable(_)));
    }

    #[test]
    fn primary_fails_on_tabular_free_listing() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());

        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/contents"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                    { "name": "README.md", "download_url": null },
                ])))
                .mount(&server),
        );

        let config = SourceConfig {
            listing_url: format!("{}/contents", server.uri()),
            fallback_url: format!("{}/fallback.xlsx", server.uri()),
        };
        let err = resolve_primary(&client().unwrap(), &config).unwrap_err();
        assert!(matches!(err, FetchError::SourceUnavailable(_)));
    }

    #[test]
    fn secondary_fetches_fixed_url_as_spreadsheet() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());

        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/final-project.xlsx"))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1_u8, 2, 3]))
                .mount(&server),
        );

        let config = SourceConfig {
            listing_url: format!("{}/contents", server.uri()),
            fallback_url: format!("{}/final-project.xlsx", server.uri()),
        };
        let raw = resolve_secondary(&client().unwrap(), &config).unwrap();

        assert_eq!(raw.format, SourceFormat::Spreadsheet);
        assert_eq!(raw.name, "final-project.xlsx");
        assert_eq!(raw.bytes, vec![1, 2, 3]);
    }
}
