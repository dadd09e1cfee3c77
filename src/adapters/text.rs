//! # Text Report Adapter
//!
//! Writes diffs as plain text to any `Write` sink.
//!
//! - Tree mode: the merged value as pretty-printed JSON
//! - Row mode: `breadcrumb<TAB>b_value<TAB>a_value`, one line per divergence

use std::io::Write;

use crate::core::{Diff, DiffRow, ListingConfig};
use crate::ports::{Report, ReportError, ReportResult};

/// Text reporter
pub struct TextReport<W: Write> {
    out: W,
    listing: ListingConfig,
}

impl<W: Write> TextReport<W> {
    /// Create a reporter with the default listing format
    pub fn new(out: W) -> Self {
        Self::with_listing(out, ListingConfig::default())
    }

    /// Create a reporter with a custom listing format
    pub fn with_listing(out: W, listing: ListingConfig) -> Self {
        Self { out, listing }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for TextReport<W> {
    fn tree(&mut self, diff: &Diff) -> ReportResult<()> {
        serde_json::to_writer_pretty(&mut self.out, diff)
            .map_err(|e| ReportError::Encode(e.to_string()))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn rows(&mut self, rows: &[DiffRow]) -> ReportResult<()> {
        for row in rows {
            writeln!(self.out, "{}", row.to_line(&self.listing))?;
        }
        self.out.flush()?;
        Ok(())
    }
}
