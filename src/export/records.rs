use indexmap::IndexMap;
use serde_json::Value;

/// Keys every data row by the header row: the first row names the columns,
/// each following row becomes one record. Cell values are kept exactly as the
/// API returned them. Rows shorter than the header are padded with empty
/// strings; cells beyond the header width are dropped. A duplicate header
/// keeps its first position and the last value.
pub fn records_from_rows(rows: &[Vec<Value>]) -> Vec<IndexMap<String, Value>> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_row.iter().map(header_key).collect();

    data_rows
        .iter()
        .map(|row| {
            let mut record = IndexMap::with_capacity(headers.len());
            for (column, header) in headers.iter().enumerate() {
                let value = row
                    .get(column)
                    .cloned()
                    .unwrap_or_else(|| Value::String(String::new()));
                record.insert(header.clone(), value);
            }
            record
        })
        .collect()
}

fn header_key(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(raw: Value) -> Vec<Vec<Value>> {
        serde_json::from_value(raw).expect("test rows should be a 2-D array")
    }

    #[test]
    fn keys_rows_by_header() {
        let records = records_from_rows(&rows(json!([["colA", "colB"], ["1", "2"]])));

        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"colA":"1","colB":"2"}]"#
        );
    }

    #[test]
    fn preserves_column_order() {
        let records = records_from_rows(&rows(json!([["z", "a", "m"], ["1", "2", "3"]])));

        let keys: Vec<_> = records[0].keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn pads_short_rows_with_empty_strings() {
        let records = records_from_rows(&rows(json!([["colA", "colB"], ["only"]])));

        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"colA":"only","colB":""}]"#
        );
    }

    #[test]
    fn drops_cells_beyond_the_header() {
        let records = records_from_rows(&rows(json!([["colA"], ["1", "extra"]])));

        assert_eq!(serde_json::to_string(&records).unwrap(), r#"[{"colA":"1"}]"#);
    }

    #[test]
    fn duplicate_header_keeps_first_position_and_last_value() {
        let records = records_from_rows(&rows(json!([["x", "y", "x"], ["1", "2", "3"]])));

        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"x":"3","y":"2"}]"#
        );
    }

    #[test]
    fn no_rows_mean_no_records() {
        assert!(records_from_rows(&[]).is_empty());
    }

    #[test]
    fn header_only_means_no_records() {
        assert!(records_from_rows(&rows(json!([["colA", "colB"]]))).is_empty());
    }

    #[test]
    fn non_string_headers_are_rendered() {
        let records = records_from_rows(&rows(json!([[1, true], ["a", "b"]])));

        let keys: Vec<_> = records[0].keys().cloned().collect();
        assert_eq!(keys, vec!["1", "true"]);
    }

    #[test]
    fn values_pass_through_unchanged() {
        let records = records_from_rows(&rows(json!([["n", "b", "s"], [42, false, "txt"]])));

        assert_eq!(
            serde_json::to_string(&records).unwrap(),
            r#"[{"n":42,"b":false,"s":"txt"}]"#
        );
    }
}
