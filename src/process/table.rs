use anyhow::{bail, Result};
use std::collections::HashSet;

/// The typed body of a single column. A column holds exactly one value kind
/// for its entire length.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// An in-memory table: named columns sharing one row count, names unique.
/// Both invariants are checked at construction and preserved by every
/// mutation this crate performs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    columns: Vec<Column>,
}

impl TabularDataset {
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let rows = first.data.len();
            for col in &columns[1..] {
                if col.data.len() != rows {
                    bail!(
                        "column `{}` has {} rows, expected {}",
                        col.name,
                        col.data.len(),
                        rows
                    );
                }
            }
        }
        let mut seen = HashSet::new();
        for col in &columns {
            if !seen.insert(col.name.as_str()) {
                bail!("duplicate column name `{}`", col.name);
            }
        }
        Ok(Self { columns })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Rename the column at `idx`. Callers are responsible for keeping
    /// names unique; the normalizer only assigns names it has proven free.
    pub(crate) fn rename_column(&mut self, idx: usize, name: &str) {
        self.columns[idx].name = name.to_string();
    }
}

/// Type a column from its raw string cells: all cells parse as `i64` makes
/// an integer column, otherwise all parse as `f64` makes a float column,
/// otherwise the cells stay text. A column with no rows stays text.
pub(crate) fn infer_column(name: String, raw: Vec<String>) -> Column {
    if raw.is_empty() {
        return Column::new(name, ColumnData::Text(raw));
    }

    let ints: Option<Vec<i64>> = raw.iter().map(|c| c.trim().parse().ok()).collect();
    if let Some(values) = ints {
        return Column::new(name, ColumnData::Int(values));
    }

    let floats: Option<Vec<f64>> = raw.iter().map(|c| c.trim().parse().ok()).collect();
    if let Some(values) = floats {
        return Column::new(name, ColumnData::Float(values));
    }

    Column::new(name, ColumnData::Text(raw))
}
