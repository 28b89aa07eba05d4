use crate::error::FetchError;
use crate::process::table::{self, TabularDataset};
use csv::ReaderBuilder;

/// Decode CSV bytes into a typed dataset. The first record is the header
/// row; every column is typed by inference over its cells.
pub fn decode(bytes: &[u8]) -> Result<TabularDataset, FetchError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| FetchError::MalformedPayload(format!("reading CSV header: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut cells: Vec<Vec<String>> = headers.iter().map(|_| Vec::new()).collect();
    for record in reader.records() {
        let record =
            record.map_err(|e| FetchError::MalformedPayload(format!("reading CSV record: {e}")))?;
        for (slot, field) in cells.iter_mut().zip(record.iter()) {
            slot.push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| table::infer_column(name, raw))
        .collect();

    TabularDataset::from_columns(columns).map_err(|e| FetchError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::table::ColumnData;

    #[test]
    fn decodes_typed_columns() {
        let csv = "Role,Salary,Rating\nData Analyst,70000,4.5\nData Engineer,90000,3\n";
        let ds = decode(csv.as_bytes()).unwrap();

        assert_eq!(ds.row_count(), 2);
        assert_eq!(
            ds.column_names().collect::<Vec<_>>(),
            vec!["Role", "Salary", "Rating"]
        );
        assert_eq!(
            ds.column("Salary").unwrap().data,
            ColumnData::Int(vec![70_000, 90_000])
        );
        assert_eq!(
            ds.column("Rating").unwrap().data,
            ColumnData::Float(vec![4.5, 3.0])
        );
    }

    #[test]
    fn ragged_record_is_malformed() {
        let csv = "a,b\n1,2\n3\n";
        let err = decode(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn duplicate_headers_are_malformed() {
        let csv = "a,a\n1,2\n";
        let err = decode(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, FetchError::MalformedPayload(_)));
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let ds = decode(b"").unwrap();
        assert_eq!(ds.column_count(), 0);
        assert_eq!(ds.row_count(), 0);
    }
}
