//! Projection of scraped column data onto the requested fields and shape.

use crate::models::{FieldSelection, OutFormat, Output, Record, Table};

/// Project a source table onto `selection` in the requested output shape.
///
/// Unknown names in the selection are ignored. Records keep schema order and
/// there is one record per scraped row, even when no selected field exists.
pub fn project(table: &Table, selection: &FieldSelection, format: OutFormat) -> Output {
    match format {
        OutFormat::Records => Output::Records(project_records(table, selection)),
        OutFormat::Table => Output::Table(table.select(selection)),
    }
}

/// One record per row, narrowed to `selection`
pub fn project_records(table: &Table, selection: &FieldSelection) -> Vec<Record> {
    table
        .to_records()
        .iter()
        .map(|record| record.select(selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        let mut table = Table::with_columns(["title", "author", "year"]);
        for (title, author, year) in [("A", "Ann", "2019"), ("B", "", "2021")] {
            table.column_mut("title").push(title.to_string());
            table.column_mut("author").push(author.to_string());
            table.column_mut("year").push(year.to_string());
        }
        table
    }

    #[test]
    fn test_records_all_fields() {
        let records = project_records(&table(), &FieldSelection::All);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keys().collect::<Vec<_>>(), ["title", "author", "year"]);
        assert_eq!(records[1].get("author"), Some(""));
    }

    #[test]
    fn test_records_keep_schema_order() {
        let selection: FieldSelection = "year,title".parse().unwrap();
        let records = project_records(&table(), &selection);
        assert_eq!(records[0].keys().collect::<Vec<_>>(), ["title", "year"]);
        assert_eq!(records[1].get("year"), Some("2021"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let selection: FieldSelection = "doi".parse().unwrap();
        let records = project_records(&table(), &selection);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Record::is_empty));

        let output = project(&table(), &selection, OutFormat::Table);
        assert_eq!(output, Output::Table(Table::default()));
    }

    #[test]
    fn test_table_shape() {
        let selection: FieldSelection = "title,doi".parse().unwrap();
        let Output::Table(projected) = project(&table(), &selection, OutFormat::Table) else {
            panic!("expected table output");
        };
        assert_eq!(projected.names().collect::<Vec<_>>(), ["title"]);
        assert_eq!(projected.column("title").unwrap(), ["A", "B"]);
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let selection: FieldSelection = "author,title".parse().unwrap();
        for format in [OutFormat::Records, OutFormat::Table] {
            let once = project(&table(), &selection, format);
            let twice = once.select(&selection);
            assert_eq!(twice, once, "format {}", format);
            assert_eq!(twice.format(), format);
        }
    }

    #[test]
    fn test_empty_table() {
        let empty = Table::with_columns(["title"]);
        assert!(project(&empty, &FieldSelection::All, OutFormat::Records).is_empty());
        assert_eq!(project(&empty, &FieldSelection::All, OutFormat::Table).len(), 0);
    }
}
