use crate::process::table::{ColumnData, TabularDataset};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Summarize every numeric column, in dataset order. Text columns and
/// zero-row columns are skipped.
pub fn numeric_summary(dataset: &TabularDataset) -> Vec<(String, NumericSummary)> {
    dataset
        .columns()
        .filter_map(|col| {
            let values: Vec<f64> = match &col.data {
                ColumnData::Int(v) => v.iter().map(|&i| i as f64).collect(),
                ColumnData::Float(v) => v.clone(),
                ColumnData::Text(_) => return None,
            };
            summarize(values).map(|s| (col.name.clone(), s))
        })
        .collect()
}

fn summarize(mut values: Vec<f64>) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let len = values.len();
    let median = if len % 2 == 0 {
        (values[len / 2 - 1] + values[len / 2]) / 2.0
    } else {
        values[len / 2]
    };
    Some(NumericSummary {
        min: values[0],
        max: values[len - 1],
        mean: values.iter().sum::<f64>() / len as f64,
        median,
    })
}

/// Count individual languages in the comma-joined `ProgrammingLanguages`
/// column, most frequent first (ties alphabetical). Empty when the column
/// is absent or not text.
pub fn language_counts(dataset: &TabularDataset) -> Vec<(String, usize)> {
    let values = match dataset.column("ProgrammingLanguages").map(|c| &c.data) {
        Some(ColumnData::Text(values)) => values,
        _ => return Vec::new(),
    };

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for cell in values {
        for part in cell.split(',') {
            let lang = part.trim();
            if !lang.is_empty() {
                *counts.entry(lang.to_string()).or_default() += 1;
            }
        }
    }

    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::table::{Column, TabularDataset};

    fn dataset(columns: Vec<Column>) -> TabularDataset {
        TabularDataset::from_columns(columns).unwrap()
    }

    #[test]
    fn summary_covers_numeric_columns_only() {
        let ds = dataset(vec![
            Column::new("Salary", ColumnData::Int(vec![40, 60, 50])),
            Column::new("Role", ColumnData::Text(vec!["a".into(), "b".into(), "c".into()])),
        ]);

        let summaries = numeric_summary(&ds);
        assert_eq!(summaries.len(), 1);
        let (name, s) = &summaries[0];
        assert_eq!(name, "Salary");
        assert_eq!(s.min, 40.0);
        assert_eq!(s.max, 60.0);
        assert_eq!(s.mean, 50.0);
        assert_eq!(s.median, 50.0);
    }

    #[test]
    fn median_of_even_count_averages_middle_pair() {
        let ds = dataset(vec![Column::new(
            "n",
            ColumnData::Float(vec![4.0, 1.0, 3.0, 2.0]),
        )]);
        assert_eq!(numeric_summary(&ds)[0].1.median, 2.5);
    }

    #[test]
    fn language_counts_split_and_rank() {
        let ds = dataset(vec![Column::new(
            "ProgrammingLanguages",
            ColumnData::Text(vec![
                "Python, SQL".into(),
                "Python".into(),
                "R, SQL, Python".into(),
            ]),
        )]);

        assert_eq!(
            language_counts(&ds),
            vec![
                ("Python".to_string(), 3),
                ("SQL".to_string(), 2),
                ("R".to_string(), 1),
            ]
        );
    }

    #[test]
    fn language_counts_without_column_is_empty() {
        let ds = dataset(vec![Column::new("Role", ColumnData::Text(vec!["a".into()]))]);
        assert!(language_counts(&ds).is_empty());
    }
}
