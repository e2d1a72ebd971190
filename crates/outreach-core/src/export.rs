//! CSV export of table rows.

use std::fmt::Write as _;

use outreach_table::{Column, Row};

/// Writes `rows` as CSV with one column per descriptor.
///
/// The header row uses column labels. Cells hold raw values rather than
/// rendered content; null and missing fields become empty cells. Fields are
/// quoted per RFC 4180 and records end with CRLF.
#[must_use]
pub fn export_csv<'a>(columns: &[Column], rows: impl IntoIterator<Item = &'a Row>) -> String {
    let mut out = String::new();
    write_record(&mut out, columns.iter().map(|c| c.label.clone()));
    for row in rows {
        write_record(&mut out, columns.iter().map(|c| row.get(&c.key).to_string()));
    }
    out
}

fn write_record(out: &mut String, fields: impl Iterator<Item = String>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\r', '\n']) {
            let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
        } else {
            out.push_str(&field);
        }
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![Column::new("name", "Name"), Column::new("note", "Note")]
    }

    #[test]
    fn header_and_plain_rows() {
        let rows = [Row::new("1").with("name", "Ana").with("note", "ok")];
        assert_eq!(export_csv(&columns(), &rows), "Name,Note\r\nAna,ok\r\n");
    }

    #[test]
    fn quotes_special_fields() {
        let rows = [Row::new("1")
            .with("name", "Doe, Jane")
            .with("note", "said \"hi\"\nthen left")];
        assert_eq!(
            export_csv(&columns(), &rows),
            "Name,Note\r\n\"Doe, Jane\",\"said \"\"hi\"\"\nthen left\"\r\n"
        );
    }

    #[test]
    fn missing_fields_are_empty() {
        let rows = [Row::new("1")];
        assert_eq!(export_csv(&columns(), &rows), "Name,Note\r\n,\r\n");
    }

    #[test]
    fn renderers_are_ignored() {
        let columns = vec![
            Column::new("score", "Score")
                .render(|_, _, _| outreach_table::CellContent::Placeholder),
        ];
        let rows = [Row::new("1").with("score", 7)];
        assert_eq!(export_csv(&columns, &rows), "Score\r\n7\r\n");
    }
}
