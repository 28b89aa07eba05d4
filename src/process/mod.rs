// src/process/mod.rs
pub mod csv_decoder;
#[cfg(feature = "excel")]
pub mod excel_decoder;
pub mod stats;
pub mod table;

use crate::error::FetchError;
use crate::fetch::{RawSource, SourceFormat};
use table::TabularDataset;
use tracing::debug;

/// Decode a fetched payload by its declared format. Spreadsheet decoding is
/// only available when the crate is built with the `excel` feature;
/// otherwise it reports [`FetchError::MissingDecoder`].
pub fn decode(raw: &RawSource) -> Result<TabularDataset, FetchError> {
    debug!(name = %raw.name, format = ?raw.format, bytes = raw.bytes.len(), "decoding payload");
    match raw.format {
        SourceFormat::Csv => csv_decoder::decode(&raw.bytes),
        #[cfg(feature = "excel")]
        SourceFormat::Spreadsheet => excel_decoder::decode(&raw.bytes),
        #[cfg(not(feature = "excel"))]
        SourceFormat::Spreadsheet => Err(FetchError::MissingDecoder),
    }
}
