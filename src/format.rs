//! Payload formatting: member CSV and block-structured (YAML) mail bodies.
//!
//! The remote API consumes two text formats this crate produces locally: a
//! CSV document for bulk member import and a YAML document for structured
//! promotion bodies. Both are plain string transformations; nothing here
//! touches the network.

use crate::config::ConfigMap;
use crate::Result;

/// Serialize a structured mail body to the block-structured (YAML) format
/// the mailer endpoint expects, e.g. `username: Andrew`.
pub fn yaml_body(body: &ConfigMap) -> Result<String> {
    let yaml = serde_yaml::to_string(body)?;
    Ok(yaml)
}

/// Serialize member records to the CSV document the audience-members
/// endpoint expects.
///
/// The first record defines the column set; its keys become the header row
/// and every following record is emitted in that same column order (missing
/// values become empty fields). Rows are terminated with CRLF, including the
/// final row. Fields are not quoted; embedded `"` characters are doubled and
/// characters outside the Latin-1 repertoire are replaced with `?`, matching
/// the legacy single-byte charset the endpoint was built around.
pub fn member_csv(records: &[ConfigMap]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let columns: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut csv = String::new();

    push_row(&mut csv, columns.iter().copied());
    for record in records {
        push_row(
            &mut csv,
            columns
                .iter()
                .map(|column| record.get(*column).map_or("", String::as_str)),
        );
    }
    csv
}

fn push_row<'a>(csv: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            csv.push(',');
        }
        push_field(csv, field);
    }
    csv.push_str("\r\n");
}

// Quote-doubling and Latin-1 folding in one pass.
fn push_field(csv: &mut String, field: &str) {
    for c in field.chars() {
        match c {
            '"' => csv.push_str("\"\""),
            c if (c as u32) <= 0xFF => csv.push(c),
            _ => csv.push('?'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::map_of;

    #[test]
    fn yaml_body_is_block_structured() {
        let body = yaml_body(&map_of([("username", "Andrew")])).unwrap();
        assert!(body.contains("username: Andrew"), "body was {body:?}");
    }

    #[test]
    fn member_csv_emits_header_then_rows_with_crlf() {
        let records = vec![
            map_of([("email", "a@example.com"), ("name", "A")]),
            map_of([("email", "b@example.com"), ("name", "B")]),
        ];
        assert_eq!(
            member_csv(&records),
            "email,name\r\na@example.com,A\r\nb@example.com,B\r\n"
        );
    }

    #[test]
    fn member_csv_doubles_embedded_quotes() {
        let records = vec![map_of([("email", "a@example.com"), ("name", "A \"Ace\"")])];
        assert_eq!(
            member_csv(&records),
            "email,name\r\na@example.com,A \"\"Ace\"\"\r\n"
        );
    }

    #[test]
    fn member_csv_keeps_latin1_and_replaces_the_rest() {
        let records = vec![map_of([("name", "Zoë \u{2192} done")])];
        assert_eq!(member_csv(&records), "name\r\nZoë ? done\r\n");
    }

    #[test]
    fn member_csv_fills_missing_columns_with_empty_fields() {
        let records = vec![
            map_of([("email", "a@example.com"), ("name", "A")]),
            map_of([("email", "b@example.com")]),
        ];
        assert_eq!(
            member_csv(&records),
            "email,name\r\na@example.com,A\r\nb@example.com,\r\n"
        );
    }

    #[test]
    fn member_csv_of_no_records_is_empty() {
        assert_eq!(member_csv(&[]), "");
    }
}
