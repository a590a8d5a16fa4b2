//! Column definitions for the user table.

use egui_extras::Column;
use useradmin_business::prefs::{COLUMN_COUNT, ColumnWidths};

pub const ROW_HEIGHT: f32 = 32.0;
pub const HEADER_HEIGHT: f32 = 34.0;
/// Grab area on the right edge of each header cell.
pub const RESIZE_HANDLE_WIDTH: f32 = 6.0;

/// Header labels, in column order.
pub const HEADERS: [&str; COLUMN_COUNT] = [
    "ID",
    "Username",
    "Name",
    "Employee ID",
    "Department",
    "Position",
    "Email",
    "Phone",
    "Role",
    "Status",
    "Actions",
];

/// One exact-width column per stored width. Resizing is driven by the header handles,
/// not by egui's built-in column resize.
pub fn table_columns(widths: &ColumnWidths) -> Vec<Column> {
    widths
        .as_slice()
        .iter()
        .map(|&width| Column::exact(width as f32))
        .collect()
}

pub fn total_width(widths: &ColumnWidths) -> f32 {
    widths.as_slice().iter().map(|&w| w as f32).sum()
}

/// Horizontal span of `column` as fractions of the total width, for the header gradient.
pub fn column_span(widths: &ColumnWidths, column: usize) -> (f32, f32) {
    let total = total_width(widths);
    if total <= 0.0 {
        return (0.0, 1.0);
    }
    let start: f32 = widths.as_slice()[..column.min(COLUMN_COUNT)]
        .iter()
        .map(|&w| w as f32)
        .sum();
    let end = start + widths.get(column) as f32;
    (start / total, end / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_the_whole_header() {
        let widths = ColumnWidths::default();
        let (first_start, _) = column_span(&widths, 0);
        let (_, last_end) = column_span(&widths, COLUMN_COUNT - 1);
        assert!(first_start.abs() < f32::EPSILON, "first column starts at 0");
        assert!((last_end - 1.0).abs() < 1e-5, "last column ends at 1");

        for column in 1..COLUMN_COUNT {
            let (_, prev_end) = column_span(&widths, column - 1);
            let (start, _) = column_span(&widths, column);
            assert!((prev_end - start).abs() < 1e-5, "column {column} is contiguous");
        }
    }

    #[test]
    fn one_column_per_width() {
        assert_eq!(table_columns(&ColumnWidths::default()).len(), COLUMN_COUNT);
    }
}
