//! Derives chart axes from query result rows.

use contracts::query::ResultRow;

/// Why a row set cannot be charted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The backend returned zero rows
    Empty,
    /// The first row has fewer than two columns
    TooFewColumns,
    /// A row's column sequence differs from the first row's
    ColumnMismatch { row: usize },
    /// The value column holds something that is not a number
    NonNumericValue { row: usize, column: String },
}

impl TableError {
    /// Inline message shown in the chart panel
    pub fn message(&self) -> String {
        match self {
            TableError::Empty => "The query returned no rows to chart".to_string(),
            TableError::TooFewColumns => {
                "The result needs at least two columns (labels and values)".to_string()
            }
            TableError::ColumnMismatch { row } => {
                format!(
                    "Row {} has a different column set than the first row",
                    row + 1
                )
            }
            TableError::NonNumericValue { row, column } => {
                format!(
                    "Row {} has a non-numeric value in column \"{}\"",
                    row + 1,
                    column
                )
            }
        }
    }
}

/// Labels and values taken from the first two columns of a row set.
///
/// The first row's column order is canonical: column one labels the axis,
/// column two supplies the numeric series. Every row must repeat that
/// column sequence; extra columns past the second are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    pub label_key: String,
    pub value_key: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartTable {
    pub fn from_rows(rows: &[ResultRow]) -> Result<ChartTable, TableError> {
        let first = rows.first().ok_or(TableError::Empty)?;
        let mut first_keys = first.keys();
        let label_key = first_keys.next().ok_or(TableError::TooFewColumns)?.clone();
        let value_key = first_keys.next().ok_or(TableError::TooFewColumns)?.clone();

        let expected: Vec<&String> = first.keys().collect();
        let mut labels = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            if !row.keys().eq(expected.iter().copied()) {
                return Err(TableError::ColumnMismatch { row: index });
            }
            let label_cell = row
                .get(&label_key)
                .ok_or(TableError::ColumnMismatch { row: index })?;
            let value_cell = row
                .get(&value_key)
                .ok_or(TableError::ColumnMismatch { row: index })?;

            labels.push(label_cell.as_label());
            let value = value_cell
                .as_number()
                .ok_or_else(|| TableError::NonNumericValue {
                    row: index,
                    column: value_key.clone(),
                })?;
            values.push(value);
        }

        Ok(ChartTable {
            label_key,
            value_key,
            labels,
            values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::query::QueryResponse;

    fn parse_rows(json: &str) -> Vec<ResultRow> {
        let response: QueryResponse =
            serde_json::from_str(&format!(r#"{{"result":{}}}"#, json)).unwrap();
        response.result
    }

    #[test]
    fn test_labels_follow_first_column_in_row_order() {
        let rows = parse_rows(
            r#"[{"month":"Jan","sales":10},{"month":"Feb","sales":20},{"month":"Mar","sales":15}]"#,
        );
        let table = ChartTable::from_rows(&rows).unwrap();
        assert_eq!(table.label_key, "month");
        assert_eq!(table.value_key, "sales");
        assert_eq!(table.labels, ["Jan", "Feb", "Mar"]);
        assert_eq!(table.labels.len(), rows.len());
        assert_eq!(table.values, [10.0, 20.0, 15.0]);
    }

    #[test]
    fn test_monthly_sales_rows() {
        let rows = parse_rows(r#"[{"month":"Jan","sales":10},{"month":"Feb","sales":20}]"#);
        let table = ChartTable::from_rows(&rows).unwrap();
        assert_eq!(table.labels, ["Jan", "Feb"]);
        assert_eq!(table.values, [10.0, 20.0]);
    }

    #[test]
    fn test_numeric_labels_and_text_values() {
        let rows = parse_rows(r#"[{"year":2023,"total":"15"},{"year":2024,"total":"30"}]"#);
        let table = ChartTable::from_rows(&rows).unwrap();
        assert_eq!(table.labels, ["2023", "2024"]);
        assert_eq!(table.values, [15.0, 30.0]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let rows = parse_rows(
            r#"[{"city":"Riga","count":5,"region":"EU"},{"city":"Oslo","count":7,"region":"EU"}]"#,
        );
        let table = ChartTable::from_rows(&rows).unwrap();
        assert_eq!(table.labels, ["Riga", "Oslo"]);
        assert_eq!(table.values, [5.0, 7.0]);
    }

    #[test]
    fn test_empty_rows_rejected() {
        assert_eq!(ChartTable::from_rows(&[]), Err(TableError::Empty));
    }

    #[test]
    fn test_single_column_rejected() {
        let rows = parse_rows(r#"[{"month":"Jan"}]"#);
        assert_eq!(ChartTable::from_rows(&rows), Err(TableError::TooFewColumns));
    }

    #[test]
    fn test_column_order_mismatch_rejected() {
        let rows = parse_rows(r#"[{"month":"Jan","sales":10},{"sales":20,"month":"Feb"}]"#);
        assert_eq!(
            ChartTable::from_rows(&rows),
            Err(TableError::ColumnMismatch { row: 1 })
        );
    }

    #[test]
    fn test_missing_column_rejected() {
        let rows = parse_rows(r#"[{"month":"Jan","sales":10},{"month":"Feb"}]"#);
        assert_eq!(
            ChartTable::from_rows(&rows),
            Err(TableError::ColumnMismatch { row: 1 })
        );
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let rows = parse_rows(r#"[{"month":"Jan","sales":"n/a"}]"#);
        assert_eq!(
            ChartTable::from_rows(&rows),
            Err(TableError::NonNumericValue {
                row: 0,
                column: "sales".to_string()
            })
        );
    }
}
