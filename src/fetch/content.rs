use crate::error::FetchError;
use reqwest::blocking::Client;
use url::Url;

/// Download a URL to memory. Non-2xx statuses and transport errors are both
/// reported as the source being unavailable.
pub fn download(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::SourceUnavailable(format!("GET {url}: {e}")))?
        .error_for_status()
        .map_err(|e| FetchError::SourceUnavailable(format!("GET {url}: {e}")))?;

    let bytes = response
        .bytes()
        .map_err(|e| FetchError::SourceUnavailable(format!("reading body from {url}: {e}")))?;

    Ok(bytes.to_vec())
}

/// Extract a display file name from a URL, falling back to a generic label
/// when the URL has no usable final segment.
pub fn file_name_of(url_str: &str) -> String {
    Url::parse(url_str)
        .ok()
        .and_then(|url| {
            url.path_segments()
                .and_then(|segments| segments.last().map(str::to_owned))
        })
        .filter(|name| !name.is_empty())
        .map(|name| name.replace("%20", " "))
        .unwrap_or_else(|| "download".to_string())
}
