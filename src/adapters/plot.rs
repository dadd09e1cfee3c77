//! # Plot Adapters
//!
//! Renderers for clusterer snapshots.
//!
//! - `AsciiPlot` - scatter plot in a character grid, for terminals
//! - `JsonSnapshotPlot` - one JSON object per snapshot (JSON Lines), for
//!   external plotting tools
//!
//! Both use the first two coordinates as axes. Every stored vector is unit
//! length, so both axes span [-1, 1].

use std::io::Write;

use crate::core::ClusterSnapshot;
use crate::ports::{Plot, PlotError, PlotResult};

/// Glyphs for record classes; classes past the end share `#`
const CLASS_GLYPHS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Glyph for centroids, drawn over records
const CENTROID_GLYPH: u8 = b'*';

fn class_glyph(class: usize) -> u8 {
    CLASS_GLYPHS.get(class).copied().unwrap_or(b'#')
}

/// Terminal scatter plot
pub struct AsciiPlot<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl<W: Write> AsciiPlot<W> {
    /// Smallest accepted grid side
    pub const MIN_SIDE: usize = 3;

    /// Create a plot of the given grid size (excluding the border)
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            width: width.max(Self::MIN_SIDE),
            height: height.max(Self::MIN_SIDE),
        }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Grid cell for a coordinate pair in [-1, 1]
    fn cell(&self, x: f32, y: f32) -> (usize, usize) {
        let scale = |v: f32, cells: usize| {
            let t = ((v.clamp(-1.0, 1.0) + 1.0) / 2.0) * (cells - 1) as f32;
            t.round() as usize
        };
        let col = scale(x, self.width);
        let row = (self.height - 1) - scale(y, self.height);
        (row, col)
    }

    fn render(&self, snapshot: &ClusterSnapshot<'_>) -> Vec<Vec<u8>> {
        let mut grid = vec![vec![b' '; self.width]; self.height];

        for (record, &class) in snapshot.records.iter().zip(snapshot.classes) {
            let dims = record.dims();
            let (row, col) = self.cell(dims[0], dims[1]);
            grid[row][col] = class_glyph(class);
        }
        for medoid in snapshot.medoids {
            let dims = medoid.dims();
            let (row, col) = self.cell(dims[0], dims[1]);
            grid[row][col] = CENTROID_GLYPH;
        }
        grid
    }
}

impl<W: Write> Plot for AsciiPlot<W> {
    fn plot(&mut self, snapshot: &ClusterSnapshot<'_>) -> PlotResult<()> {
        let dims = snapshot
            .medoids
            .iter()
            .chain(snapshot.records)
            .map(|p| p.dimensionality())
            .min()
            .unwrap_or(0);
        if dims < 2 {
            return Err(PlotError::TooFewDimensions(dims));
        }

        let grid = self.render(snapshot);
        let border = format!("+{}+", "-".repeat(self.width));

        writeln!(self.out, "{}", border)?;
        for row in grid {
            writeln!(self.out, "|{}|", String::from_utf8_lossy(&row))?;
        }
        writeln!(self.out, "{}", border)?;
        writeln!(
            self.out,
            "records: {}  clusters: {}  (digits = class, * = centroid)",
            snapshot.records.len(),
            snapshot.medoids.len()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// JSON Lines snapshot writer
pub struct JsonSnapshotPlot<W: Write> {
    out: W,
}

impl<W: Write> JsonSnapshotPlot<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Plot for JsonSnapshotPlot<W> {
    fn plot(&mut self, snapshot: &ClusterSnapshot<'_>) -> PlotResult<()> {
        serde_json::to_writer(&mut self.out, snapshot)
            .map_err(|e| PlotError::Encode(e.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use serde_json::{json, Value};

    fn snapshot_parts() -> (Vec<Point>, Vec<usize>, Vec<Point>) {
        let records = vec![Point::new(vec![1.0, 0.0]), Point::new(vec![0.0, 1.0])];
        let classes = vec![0, 1];
        let medoids = vec![Point::new(vec![-1.0, -1.0]), Point::new(vec![0.0, 0.0])];
        (records, classes, medoids)
    }

    #[test]
    fn test_ascii_plot_places_glyphs() {
        let (records, classes, medoids) = snapshot_parts();
        let snapshot = ClusterSnapshot {
            records: &records,
            classes: &classes,
            medoids: &medoids,
        };

        let mut plot = AsciiPlot::new(Vec::new(), 5, 5);
        plot.plot(&snapshot).unwrap();
        let text = String::from_utf8(plot.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "+-----+");
        // (0, 1) -> top row, middle column
        assert_eq!(lines[1], "|  1  |");
        // (1, 0) -> middle row, right column; (0, 0) centroid in the centre
        assert_eq!(lines[3], "|  * 0|");
        // (-1, -1) -> bottom-left
        assert_eq!(lines[5], "|*    |");
        assert!(lines[7].starts_with("records: 2  clusters: 2"));
    }

    #[test]
    fn test_ascii_plot_rejects_one_dimension() {
        let records = vec![Point::new(vec![1.0])];
        let classes = vec![0];
        let medoids = vec![Point::new(vec![1.0])];
        let snapshot = ClusterSnapshot {
            records: &records,
            classes: &classes,
            medoids: &medoids,
        };

        let mut plot = AsciiPlot::new(Vec::new(), 10, 10);
        assert!(matches!(plot.plot(&snapshot), Err(PlotError::TooFewDimensions(1))));
    }

    #[test]
    fn test_class_glyph_overflow() {
        assert_eq!(class_glyph(3), b'3');
        assert_eq!(class_glyph(10), b'a');
        assert_eq!(class_glyph(100), b'#');
    }

    #[test]
    fn test_json_snapshot_plot() {
        let (records, classes, medoids) = snapshot_parts();
        let snapshot = ClusterSnapshot {
            records: &records,
            classes: &classes,
            medoids: &medoids,
        };

        let mut plot = JsonSnapshotPlot::new(Vec::new());
        plot.plot(&snapshot).unwrap();
        plot.plot(&snapshot).unwrap();
        let text = String::from_utf8(plot.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["classes"], json!([0, 1]));
        assert_eq!(first["records"][1], json!([0.0, 1.0]));
        assert_eq!(first["medoids"].as_array().unwrap().len(), 2);
    }
}
