// ABOUTME: Chart rendering sinks - a one-way command receiving labeled series.
// ABOUTME: Includes a text renderer, a recording sink, and a no-op sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::error::ChartError;

/// A labeled bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, u64)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<(String, u64)>) -> Self {
        Self {
            title: title.into(),
            bars,
        }
    }
}

/// Receives charts to render. Nothing is returned to the caller.
pub trait ChartSink: Send + Sync {
    fn render(&self, chart: &BarChart) -> Result<(), ChartError>;
}

/// Discards every chart.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChart;

impl ChartSink for NoopChart {
    fn render(&self, _chart: &BarChart) -> Result<(), ChartError> {
        Ok(())
    }
}

/// Keeps every rendered chart in memory.
#[derive(Debug, Default)]
pub struct RecordingChart {
    charts: Mutex<Vec<BarChart>>,
}

impl RecordingChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Charts rendered so far, oldest first.
    pub fn charts(&self) -> Vec<BarChart> {
        self.charts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ChartSink for RecordingChart {
    fn render(&self, chart: &BarChart) -> Result<(), ChartError> {
        self.charts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(chart.clone());
        Ok(())
    }
}

/// Draws horizontal ASCII bars to stdout or appends them to a file.
#[derive(Debug, Clone, Default)]
pub struct TextChart {
    path: Option<PathBuf>,
}

const BAR_WIDTH: u64 = 40;

impl TextChart {
    pub fn stdout() -> Self {
        Self { path: None }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Render `chart` as text, one bar per line scaled to the largest value.
    pub fn format(chart: &BarChart) -> String {
        let mut out = format!("{}\n", chart.title);
        let label_width = chart
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let max = chart.bars.iter().map(|(_, v)| *v).max().unwrap_or(0);

        for (label, value) in &chart.bars {
            let len = if max == 0 { 0 } else { value * BAR_WIDTH / max };
            out.push_str(&format!(
                "{:<width$} | {} {}\n",
                label,
                "#".repeat(len as usize),
                value,
                width = label_width
            ));
        }
        out
    }
}

impl ChartSink for TextChart {
    fn render(&self, chart: &BarChart) -> Result<(), ChartError> {
        let text = Self::format(chart);
        match &self.path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(text.as_bytes())?;
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BarChart {
        BarChart::new(
            "Top words",
            vec![("rust".to_string(), 4), ("kafka".to_string(), 2)],
        )
    }

    #[test]
    fn test_format_scales_to_largest() {
        let text = TextChart::format(&sample());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Top words");
        assert_eq!(lines[1], format!("rust  | {} 4", "#".repeat(40)));
        assert_eq!(lines[2], format!("kafka | {} 2", "#".repeat(20)));
    }

    #[test]
    fn test_format_empty_chart() {
        let text = TextChart::format(&BarChart::new("Nothing", Vec::new()));
        assert_eq!(text, "Nothing\n");
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.txt");
        let sink = TextChart::file(&path);

        sink.render(&sample()).unwrap();
        sink.render(&sample()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("Top words").count(), 2);
    }

    #[test]
    fn test_file_sink_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TextChart::file(dir.path().join("missing").join("chart.txt"));
        assert!(matches!(sink.render(&sample()), Err(ChartError::Io(_))));
    }

    #[test]
    fn test_recording_sink_keeps_charts() {
        let sink = RecordingChart::new();
        sink.render(&sample()).unwrap();

        assert_eq!(sink.charts(), vec![sample()]);
        assert!(NoopChart.render(&sample()).is_ok());
    }
}
