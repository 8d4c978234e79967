use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value in a single result cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing value
    Null,
    /// Integer value
    Integer(i64),
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl CellValue {
    /// Cell rendered as an axis label
    pub fn as_label(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Integer(v) => v.to_string(),
            CellValue::Number(v) => v.to_string(),
            CellValue::Text(v) => v.clone(),
        }
    }

    /// Cell coerced to a numeric axis value, if it carries one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Integer(v) => Some(*v as f64),
            CellValue::Number(v) => Some(*v),
            CellValue::Text(v) => v.trim().parse().ok(),
        }
    }
}

/// One query result row: column name to value, in column order
pub type ResultRow = IndexMap<String, CellValue>;

/// Envelope returned by the row-producing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Result rows in query order
    pub result: Vec<ResultRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_decoding() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"["Jan", 10, 2.5, null]"#).unwrap();
        assert_eq!(cells[0], CellValue::Text("Jan".to_string()));
        assert_eq!(cells[1], CellValue::Integer(10));
        assert_eq!(cells[2], CellValue::Number(2.5));
        assert_eq!(cells[3], CellValue::Null);
    }

    #[test]
    fn test_envelope_keeps_column_order() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"result":[{"month":"Jan","sales":10},{"month":"Feb","sales":20}]}"#,
        )
        .unwrap();
        assert_eq!(response.result.len(), 2);
        let keys: Vec<&str> = response.result[0].keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["month", "sales"]);
    }

    #[test]
    fn test_as_number_coercion() {
        assert_eq!(CellValue::Integer(10).as_number(), Some(10.0));
        assert_eq!(CellValue::Number(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::Text("42".to_string()).as_number(), Some(42.0));
        assert_eq!(CellValue::Text("Jan".to_string()).as_number(), None);
        assert_eq!(CellValue::Null.as_number(), None);
    }

    #[test]
    fn test_as_label() {
        assert_eq!(CellValue::Text("Jan".to_string()).as_label(), "Jan");
        assert_eq!(CellValue::Integer(2024).as_label(), "2024");
        assert_eq!(CellValue::Null.as_label(), "");
    }
}
