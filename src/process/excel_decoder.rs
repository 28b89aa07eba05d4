use crate::error::FetchError;
use crate::process::table::{self, TabularDataset};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// Decode workbook bytes (`.xlsx`/`.xls`) into a typed dataset. Only the
/// first sheet is read; its first row is taken as the header row.
pub fn decode(bytes: &[u8]) -> Result<TabularDataset, FetchError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| FetchError::MalformedPayload(format!("opening workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| FetchError::MalformedPayload("workbook has no sheets".to_string()))?
        .map_err(|e| FetchError::MalformedPayload(format!("reading first sheet: {e}")))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(|c| cell_to_string(c).trim().to_string()).collect(),
        None => {
            return TabularDataset::from_columns(Vec::new())
                .map_err(|e| FetchError::MalformedPayload(e.to_string()))
        }
    };

    let mut cells: Vec<Vec<String>> = headers.iter().map(|_| Vec::new()).collect();
    for row in rows {
        for (slot, cell) in cells.iter_mut().zip(row.iter()) {
            slot.push(cell_to_string(cell));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| table::infer_column(name, raw))
        .collect();

    TabularDataset::from_columns(columns).map_err(|e| FetchError::MalformedPayload(e.to_string()))
}

/// Render a cell for column-type inference. Whole-valued floats become
/// integer text so a salary column read back from Excel types as integer.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (*f as i64).to_string()
        }
        other => other.to_string(),
    }
}
