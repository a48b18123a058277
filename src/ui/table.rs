//! Table rendering for the sessions table dashboard.

use crate::components::availability::SessionRecord;
use chrono_tz::Tz;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        // Header
        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", header, width = widths[i]));
        }
        out.push('\n');

        // Separator
        for width in &widths {
            out.push_str(&"-".repeat(*width));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            out.push('\n');
        }

        out
    }

    // Each column is as wide as its widest cell, header included
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }
        widths
    }
}

/// Render session records as a flat table, times shown in `tz`
pub fn render_sessions(records: &[SessionRecord], tz: &Tz) -> String {
    let mut table = Table::new(vec!["Session", "Start", "End", "Availability"]);

    for record in records {
        table.add_row(vec![
            record.session_type.clone(),
            record
                .start_time
                .with_timezone(tz)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            record
                .end_time
                .with_timezone(tz)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            record
                .last_availability
                .map(|count| count.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn record(session_type: &str, start: &str, end: &str, availability: Option<i64>) -> SessionRecord {
        SessionRecord {
            id: None,
            session_type: session_type.to_string(),
            start_time: DateTime::parse_from_rfc3339(start).unwrap(),
            end_time: DateTime::parse_from_rfc3339(end).unwrap(),
            last_availability: availability,
        }
    }

    #[test]
    fn test_render_sessions_shows_all_fields() {
        let records = vec![record(
            "Surfnight",
            "2025-03-01T19:00:00+00:00",
            "2025-03-01T21:00:00+00:00",
            Some(7),
        )];

        let out = render_sessions(&records, &chrono_tz::Europe::Berlin);
        assert!(out.contains("Session"));
        assert!(out.contains("Availability"));
        assert!(out.contains("Surfnight"));
        // 19:00 UTC is 20:00 in Berlin in March
        assert!(out.contains("2025-03-01 20:00"));
        assert!(out.contains('7'));
    }

    #[test]
    fn test_missing_availability_renders_dash() {
        let records = vec![record(
            "Surfnight",
            "2025-03-01T19:00:00+00:00",
            "2025-03-01T21:00:00+00:00",
            None,
        )];

        let out = render_sessions(&records, &chrono_tz::UTC);
        let data_line = out.lines().nth(2).unwrap();
        assert!(data_line.trim_end().ends_with('-'));
    }

    #[test]
    fn test_columns_fit_widest_cell() {
        let mut table = Table::new(vec!["A", "B"]);
        table.add_row(vec!["wide-cell-content".to_string(), "x".to_string()]);

        let out = table.render();
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("A                "));
    }
}
