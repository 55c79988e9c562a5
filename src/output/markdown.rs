//! Markdown table rendering
//!
//! Pipe-table layout with a leading unnamed row-index column. Text columns are
//! left-aligned and numeric columns right-aligned, with fractional values lined
//! up on the decimal point. Each column is at least two characters wider than
//! its header, and every cell is padded by one space on each side.

use crate::records::RecordSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
    cells: Vec<String>,
}

impl Column {
    fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
            .max(self.header.len() + 2)
    }

    fn pad(&self, text: &str, width: usize) -> String {
        match self.align {
            Align::Left => format!("{:<width$}", text),
            Align::Right => format!("{:>width$}", text),
        }
    }

    fn rule(&self, width: usize) -> String {
        let dashes = "-".repeat(width + 1);
        match self.align {
            Align::Left => format!(":{}", dashes),
            Align::Right => format!("{}:", dashes),
        }
    }
}

pub struct MarkdownTable;

impl MarkdownTable {
    /// Render every record as one table row, in input order
    pub fn render(records: &RecordSet) -> String {
        let columns = [
            Column {
                header: "",
                align: Align::Right,
                cells: (0..records.len()).map(|i| i.to_string()).collect(),
            },
            Column {
                header: "alg",
                align: Align::Left,
                cells: records.iter().map(|r| r.alg.clone()).collect(),
            },
            Column {
                header: "segments",
                align: Align::Right,
                cells: records.iter().map(|r| r.segments.to_string()).collect(),
            },
            Column {
                header: "time",
                align: Align::Right,
                // Display for f64 is the shortest string that parses back exactly
                cells: align_decimals(records.iter().map(|r| r.time.to_string()).collect()),
            },
        ];
        let widths: Vec<usize> = columns.iter().map(Column::width).collect();

        let mut out = String::new();

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| col.pad(col.header, w))
            .collect();
        write_row(&mut out, &header);

        let rule: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| col.rule(w))
            .collect();
        out.push_str(&format!("|{}|\n", rule.join("|")));

        for row in 0..records.len() {
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(col, &w)| col.pad(&col.cells[row], w))
                .collect();
            write_row(&mut out, &cells);
        }

        out
    }
}

fn write_row(out: &mut String, cells: &[String]) {
    out.push_str(&format!("| {} |\n", cells.join(" | ")));
}

/// Pad on the right so every decimal point sits in the same column.
/// Values without a point are treated as ending just before it.
fn align_decimals(cells: Vec<String>) -> Vec<String> {
    let fraction = |s: &str| s.find('.').map(|pos| s.len() - pos - 1);
    let widest = match cells.iter().filter_map(|c| fraction(c)).max() {
        Some(widest) => widest,
        None => return cells,
    };

    cells
        .into_iter()
        .map(|cell| {
            let pad = match fraction(&cell) {
                Some(digits) => widest - digits,
                None => widest + 1,
            };
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::BenchmarkRecord;

    fn scenario() -> RecordSet {
        RecordSet::from_rows(&[
            "alg,segments,time",
            "sieve,10,1.2",
            "sieve,20,2.1",
            "wheel,10,0.9",
        ])
        .unwrap()
    }

    /// Read data rows back out of a rendered table
    fn parse_table(table: &str) -> Vec<BenchmarkRecord> {
        table
            .lines()
            .skip(2)
            .map(|line| {
                let cells: Vec<&str> = line
                    .trim_matches('|')
                    .split('|')
                    .map(str::trim)
                    .collect();
                BenchmarkRecord {
                    alg: cells[1].to_string(),
                    segments: cells[2].parse().unwrap(),
                    time: cells[3].parse().unwrap(),
                }
            })
            .collect()
    }

    #[test]
    fn test_render_layout() {
        let table = MarkdownTable::render(&scenario());
        let expected = "\
|    | alg   |   segments |   time |
|---:|:------|-----------:|-------:|
|  0 | sieve |         10 |    1.2 |
|  1 | sieve |         20 |    2.1 |
|  2 | wheel |         10 |    0.9 |
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_row_count_and_order() {
        let set = scenario();
        let table = MarkdownTable::render(&set);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), set.len() + 2);
        assert!(lines[2].contains("10") && lines[2].contains("1.2"));
        assert!(lines[3].contains("20") && lines[3].contains("2.1"));
        assert!(lines[4].contains("wheel"));
    }

    #[test]
    fn test_round_trip() {
        let mut set = scenario();
        set.add(BenchmarkRecord {
            alg: "Parallel segmented".to_string(),
            segments: 50_000,
            time: 0.123_456_789_012_345_6,
        });

        let parsed = parse_table(&MarkdownTable::render(&set));
        let original: Vec<BenchmarkRecord> = set.iter().cloned().collect();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_wide_values_stretch_columns() {
        let set = RecordSet::from_rows(&["alg,segments,time", "Sequential,1000000,12.75"]).unwrap();
        let table = MarkdownTable::render(&set);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "|    | alg        |   segments |   time |");
        assert_eq!(lines[1], "|---:|:-----------|-----------:|-------:|");
        assert_eq!(lines[2], "|  0 | Sequential |    1000000 |  12.75 |");
    }

    #[test]
    fn test_decimal_points_line_up() {
        let set = RecordSet::from_rows(&[
            "alg,segments,time",
            "Sequential,1000,1.2",
            "Sequential,5000,12.75",
            "Parallel,1000,3",
        ])
        .unwrap();
        let table = MarkdownTable::render(&set);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "|    | alg        |   segments |   time |");
        assert_eq!(lines[2], "|  0 | Sequential |       1000 |   1.2  |");
        assert_eq!(lines[3], "|  1 | Sequential |       5000 |  12.75 |");
        assert_eq!(lines[4], "|  2 | Parallel   |       1000 |   3    |");
        assert_eq!(parse_table(&table), set.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn test_align_decimals() {
        let cells = vec!["0.5".to_string(), "10".to_string(), "2.125".to_string()];
        assert_eq!(align_decimals(cells), vec!["0.5  ", "10    ", "2.125"]);

        let whole = vec!["7".to_string(), "42".to_string()];
        assert_eq!(align_decimals(whole.clone()), whole);
    }

    #[test]
    fn test_empty_set() {
        let table = MarkdownTable::render(&RecordSet::new());
        assert_eq!(table.lines().count(), 2);
    }
}
