//! Record and table models for scraped rows.
//!
//! A [`Record`] is one row (a publication or a patent) keyed by field name.
//! A [`Table`] holds the same information column-wise. Both keep the field
//! order of the source schema, so converting one into the other is lossless.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::FieldSelection;

/// One scraped row: an ordered mapping from field name to value.
///
/// Missing values are stored as empty strings, never dropped, so every record
/// produced by one source has the same key set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing the value if the field already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Get the value of a field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keep only the fields accepted by `selection`
    pub fn select(&self, selection: &FieldSelection) -> Record {
        Record {
            fields: self
                .fields
                .iter()
                .filter(|(n, _)| selection.includes(n))
                .cloned()
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A named column of values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

/// Column-oriented view of a result set.
///
/// Columns are expected to have equal length; [`Table::is_aligned`] reports
/// whether they do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table with the given (empty) columns
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: names
                .into_iter()
                .map(|name| Column {
                    name: name.into(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the values of one column
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Mutable access to a column, creating it if it does not exist yet
    pub fn column_mut(&mut self, name: &str) -> &mut Vec<String> {
        let idx = match self.columns.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.columns.push(Column {
                    name: name.to_string(),
                    values: Vec::new(),
                });
                self.columns.len() - 1
            }
        };
        &mut self.columns[idx].values
    }

    /// Length of every column, in column order
    pub fn column_lengths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.values.len()).collect()
    }

    /// True when every column has the same number of values
    pub fn is_aligned(&self) -> bool {
        self.columns
            .windows(2)
            .all(|pair| pair[0].values.len() == pair[1].values.len())
    }

    /// Number of rows (length of the first column)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Append another table's rows, matching columns by name
    pub fn extend(&mut self, other: Table) {
        for column in other.columns {
            self.column_mut(&column.name).extend(column.values);
        }
    }

    /// Keep only the columns accepted by `selection`
    pub fn select(&self, selection: &FieldSelection) -> Table {
        Table {
            columns: self
                .columns
                .iter()
                .filter(|c| selection.includes(&c.name))
                .cloned()
                .collect(),
        }
    }

    /// Transpose into one record per row
    pub fn to_records(&self) -> Vec<Record> {
        (0..self.row_count())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| {
                        let value = c.values.get(row).cloned().unwrap_or_default();
                        (c.name.clone(), value)
                    })
                    .collect()
            })
            .collect()
    }

    /// Transpose records back into columns.
    ///
    /// Column order follows the first record; a record without one of those
    /// fields contributes an empty string.
    pub fn from_records(records: &[Record]) -> Table {
        let mut table = match records.first() {
            Some(first) => Table::with_columns(first.keys()),
            None => return Table::default(),
        };
        for record in records {
            for column in &mut table.columns {
                let value = record.get(&column.name).unwrap_or_default();
                column.values.push(value.to_string());
            }
        }
        table
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.name, &column.values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::with_columns(["title", "author", "year"]);
        table.column_mut("title").extend(["T1".to_string(), "T2".to_string()]);
        table.column_mut("author").extend(["A1".to_string(), String::new()]);
        table.column_mut("year").extend(["2019".to_string(), "2021".to_string()]);
        table
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let record: Record = [("title", "T"), ("author", "A"), ("year", "2020")]
            .into_iter()
            .collect();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["title", "author", "year"]);
        assert_eq!(record.get("author"), Some("A"));
        assert_eq!(record.get("quartile"), None);
    }

    #[test]
    fn test_record_serializes_as_ordered_object() {
        let record: Record = [("title", "T"), ("author", "")].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"title":"T","author":""}"#);
    }

    #[test]
    fn test_table_transpose_roundtrip() {
        let table = sample_table();
        let records = table.to_records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("author"), Some(""));
        assert_eq!(Table::from_records(&records), table);
    }

    #[test]
    fn test_table_alignment() {
        let mut table = sample_table();
        assert!(table.is_aligned());
        assert_eq!(table.row_count(), 2);

        table.column_mut("year").push("2022".to_string());
        assert!(!table.is_aligned());
        assert_eq!(table.column_lengths(), vec![2, 2, 3]);
    }

    #[test]
    fn test_table_extend_appends_by_name() {
        let mut table = sample_table();
        let mut page_two = Table::with_columns(["title", "author", "year"]);
        page_two.column_mut("title").push("T3".to_string());
        page_two.column_mut("author").push("A3".to_string());
        page_two.column_mut("year").push("2023".to_string());

        table.extend(page_two);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column("title").unwrap()[2], "T3");
    }

    #[test]
    fn test_empty_table() {
        let table = Table::with_columns(["title"]);
        assert!(table.is_empty());
        assert!(table.to_records().is_empty());
        assert_eq!(Table::from_records(&[]), Table::default());
    }
}
