//! Fixed-width text tables sized to their contents.
//!
//! Rows are `#[derive(Tabled)]` structs; [`render`] lays them out with a
//! header, a `-` rule across the table and two spaces between columns.

use std::fmt;

use tabled::{
    Table, Tabled,
    settings::{
        Alignment, Modify, Padding, Style, Width,
        object::{Columns, Object, Rows, Segment},
    },
};

/// A number rendered with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fixed2(pub f64);

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Fixed2 {
    fn from(value: f64) -> Self {
        Fixed2(value)
    }
}

/// Layout of one column: minimum content width and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub min_width: usize,
    pub numeric: bool,
}

impl ColumnLayout {
    /// A left-aligned text column.
    pub const fn text(min_width: usize) -> Self {
        Self {
            min_width,
            numeric: false,
        }
    }

    /// A right-aligned numeric column.
    pub const fn number(min_width: usize) -> Self {
        Self {
            min_width,
            numeric: true,
        }
    }
}

/// Renders `rows` under their derived headers.
///
/// Each column is as wide as the largest of its minimum width, its header
/// and its longest cell. `layout` is matched to columns by position; columns
/// without an entry are left-aligned text.
pub fn render<T: Tabled>(rows: &[T], layout: &[ColumnLayout]) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql().remove_vertical())
        .with(Modify::new(Segment::all()).with(Padding::new(0, 2, 0, 0)))
        .with(Modify::new(Columns::last()).with(Padding::zero()))
        .with(Modify::new(Segment::all()).with(Alignment::left()));

    for (i, column) in layout.iter().enumerate() {
        if column.numeric {
            table.with(Modify::new(Columns::one(i)).with(Alignment::right()));
        }
        if column.min_width > 0 {
            // Widening the header widens the column without padding the cells.
            table.with(
                Modify::new(Rows::first().intersect(Columns::one(i)))
                    .with(Width::increase(column.min_width)),
            );
        }
    }

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct ScoreRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Score")]
        score: Fixed2,
    }

    const LAYOUT: [ColumnLayout; 2] = [ColumnLayout::text(0), ColumnLayout::number(0)];

    fn row(name: &str, score: f64) -> ScoreRow {
        ScoreRow {
            name: name.to_string(),
            score: score.into(),
        }
    }

    fn sample() -> String {
        render(&[row("Asha", 72.0), row("Bartholomew", 5.456)], &LAYOUT)
    }

    #[test]
    fn test_render_layout() {
        let rendered = sample();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].ends_with("Score"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("Asha"));
        assert!(lines[3].starts_with("Bartholomew"));
    }

    #[test]
    fn test_rule_spans_every_line() {
        let rendered = sample();
        let lines: Vec<_> = rendered.lines().collect();
        let rule = lines[1].chars().count();

        assert!(lines.iter().all(|l| l.chars().count() <= rule));
        assert_eq!(lines[2].chars().count(), rule);
    }

    #[test]
    fn test_numbers_right_aligned() {
        let rendered = sample();
        let lines: Vec<_> = rendered.lines().collect();

        assert!(lines[2].ends_with("72.00"));
        assert!(lines[3].ends_with(" 5.46"));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
    }

    #[test]
    fn test_columns_separated_by_two_spaces() {
        let rendered = sample();
        let lines: Vec<_> = rendered.lines().collect();

        // "Bartholomew" is the widest cell of the first column.
        assert!(lines[3].starts_with("Bartholomew   5.46"));
    }

    #[test]
    fn test_header_wider_than_cells() {
        #[derive(Tabled)]
        struct AverageRow {
            #[tabled(rename = "Average %")]
            average: Fixed2,
        }

        let rendered = render(&[AverageRow { average: Fixed2(1.0) }], &[ColumnLayout::number(0)]);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "Average %");
        assert_eq!(lines[2], "     1.00");
    }

    #[test]
    fn test_min_width_applies() {
        let layout = [ColumnLayout::text(12), ColumnLayout::number(0)];
        let rendered = render(&[row("Asha", 72.0)], &layout);
        let lines: Vec<_> = rendered.lines().collect();

        assert!(lines[1].chars().count() >= 12 + 2 + "Score".len());
        assert!(lines[2].starts_with("Asha "));
        assert!(lines[2].ends_with("72.00"));
    }

    #[test]
    fn test_fixed2_rounds_to_two_decimals() {
        assert_eq!(Fixed2(2.0 / 3.0).to_string(), "0.67");
        assert_eq!(Fixed2(99.999).to_string(), "100.00");
        assert_eq!(Fixed2(0.0).to_string(), "0.00");
    }
}
