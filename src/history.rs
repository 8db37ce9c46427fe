// 📈 History - Read-only view of every stored calculation
// Text table, chart series, and trend statistics

use crate::bmi::BmiRecord;
use crate::store::{RecordStore, HEADER};
use anyhow::Result;

/// Outcome of asking for the history view
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryView {
    /// Nothing stored yet; show the "No Data" notice instead of a view
    Empty,
    Records(History),
}

/// Load everything from the store in entry order
pub fn load(store: &dyn RecordStore) -> Result<HistoryView> {
    let records = store.read_all()?;
    tracing::debug!(count = records.len(), "history loaded");

    if records.is_empty() {
        Ok(HistoryView::Empty)
    } else {
        Ok(HistoryView::Records(History { records }))
    }
}

// ============================================================================
// HISTORY
// ============================================================================

/// Non-empty, ordered snapshot of the store
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    records: Vec<BmiRecord>,
}

impl History {
    pub fn records(&self) -> &[BmiRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (record index, BMI) pairs, index 0-based in file order
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.bmi))
            .collect()
    }

    /// X axis range covering every index. A single point still gets a
    /// non-zero width.
    pub fn x_bounds(&self) -> [f64; 2] {
        let last = (self.records.len().saturating_sub(1)) as f64;
        if last == 0.0 {
            [-0.5, 0.5]
        } else {
            [0.0, last]
        }
    }

    /// Y axis range with one BMI unit of padding on both sides
    pub fn y_bounds(&self) -> [f64; 2] {
        let stats = self.stats();
        [(stats.min - 1.0).floor(), (stats.max + 1.0).ceil()]
    }

    pub fn stats(&self) -> TrendStats {
        let count = self.records.len();
        let bmis = self.records.iter().map(|r| r.bmi);

        let min = bmis.clone().fold(f64::INFINITY, f64::min);
        let max = bmis.clone().fold(f64::NEG_INFINITY, f64::max);
        let mean = bmis.sum::<f64>() / count as f64;

        let first = self.records.first().map(|r| r.bmi).unwrap_or_default();
        let latest = self.records.last().map(|r| r.bmi).unwrap_or_default();

        TrendStats {
            count,
            min,
            max,
            mean,
            latest,
            change: latest - first,
        }
    }

    /// Plain text table of all records, columns right-aligned, no index
    pub fn render_text(&self) -> String {
        let rows: Vec<[String; 5]> = self
            .records
            .iter()
            .map(|r| {
                [
                    format_number(r.weight),
                    format_number(r.height),
                    r.unit.token().to_string(),
                    format_number(r.bmi),
                    r.status.label().to_string(),
                ]
            })
            .collect();

        let mut widths = HEADER.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.len());
            }
        }

        let mut out = String::new();
        push_line(&mut out, HEADER.iter().copied(), &widths);
        for row in &rows {
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    let line = cells
        .zip(widths)
        .map(|(cell, w)| format!("{:>width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&line);
    out.push('\n');
}

/// Whole numbers keep one decimal so the table reads like the file
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// ============================================================================
// TREND STATISTICS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub latest: f64,
    /// Latest minus first BMI
    pub change: f64,
}

impl TrendStats {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Records: {}", self.count),
            format!("Latest:  {:.2}", self.latest),
            format!("Mean:    {:.2}", self.mean),
            format!("Min:     {:.2}", self.min),
            format!("Max:     {:.2}", self.max),
            format!("Change:  {:+.2}", self.change),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::calculate;
    use crate::store::CsvStore;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, inputs: &[(f64, f64, &str)]) -> CsvStore {
        let store = CsvStore::new(dir.path().join("bmi_data.csv"));
        store.initialize().unwrap();
        for (w, h, unit) in inputs {
            store.append(&calculate(*w, *h, unit).unwrap()).unwrap();
        }
        store
    }

    #[test]
    fn test_empty_store_gives_no_data() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[]);

        assert_eq!(load(&store).unwrap(), HistoryView::Empty);
    }

    #[test]
    fn test_three_submissions_give_three_points() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[(70.0, 1.75, "k"), (72.0, 1.75, "k"), (150.0, 65.0, "p")]);

        let history = match load(&store).unwrap() {
            HistoryView::Records(h) => h,
            HistoryView::Empty => panic!("expected records"),
        };

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.chart_points(),
            vec![(0.0, 22.86), (1.0, 23.51), (2.0, 24.96)]
        );
        assert_eq!(history.x_bounds(), [0.0, 2.0]);

        let text = history.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Weight_Status"));
        assert!(lines[1].contains("22.86"));
        assert!(lines[3].contains("24.96"));
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[(70.0, 1.75, "k")]);
        let HistoryView::Records(history) = load(&store).unwrap() else {
            panic!("expected records");
        };

        assert_eq!(
            history.render_text(),
            "Weight Height Measurement_Type   BMI  Weight_Status\n\
             \x20 70.0   1.75                k 22.86 Healthy Weight\n"
        );
    }

    #[test]
    fn test_single_point_bounds() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[(70.0, 1.75, "k")]);
        let HistoryView::Records(history) = load(&store).unwrap() else {
            panic!("expected records");
        };

        assert_eq!(history.x_bounds(), [-0.5, 0.5]);
        assert_eq!(history.y_bounds(), [21.0, 24.0]);
    }

    #[test]
    fn test_trend_stats() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[(80.0, 2.0, "k"), (100.0, 2.0, "k"), (90.0, 2.0, "k")]);
        let HistoryView::Records(history) = load(&store).unwrap() else {
            panic!("expected records");
        };

        let stats = history.stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 20.0);
        assert_eq!(stats.max, 25.0);
        assert_eq!(stats.mean, 22.5);
        assert_eq!(stats.latest, 22.5);
        assert_eq!(stats.change, 2.5);
        assert_eq!(stats.lines()[5], "Change:  +2.50");
    }
}
