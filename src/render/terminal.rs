//! Terminal renderer
//!
//! Appends records to a writer as they arrive. The list only ever grows, so
//! each render writes just the records added since the previous one.

use super::{FeedView, ListRenderer, OutputFormat, TITLE};
use crate::error::Result;
use crate::types::{CombinationRecord, JsonValue};
use serde_json::json;
use std::io::Write;

/// Renders a feed to any `io::Write`
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    format: OutputFormat,
    rendered: usize,
    title_shown: bool,
    loader_shown: bool,
    banner_shown: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Create a renderer
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            rendered: 0,
            title_shown: false,
            loader_shown: false,
            banner_shown: false,
        }
    }

    /// Number of records written so far
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, index: usize, record: &CombinationRecord) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(self.out, "{}", serde_json::to_string(record)?)?;
            }
            OutputFormat::Pretty => {
                writeln!(self.out, "{:>4}. {}", index + 1, record.label())?;
                for (key, value) in &record.fields {
                    if key == "name" {
                        continue;
                    }
                    writeln!(self.out, "      {key}: {}", display_value(value))?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> ListRenderer for TerminalRenderer<W> {
    fn render(&mut self, view: &FeedView<'_>) -> Result<()> {
        if self.format == OutputFormat::Pretty && !self.title_shown {
            writeln!(self.out, "{TITLE}")?;
            writeln!(self.out)?;
            self.title_shown = true;
        }

        if view.show_loader && !self.loader_shown && self.format == OutputFormat::Pretty {
            writeln!(self.out, "Loading...")?;
            self.loader_shown = true;
        }

        if view.show_list {
            let start = self.rendered.min(view.items.len());
            for (offset, record) in view.items[start..].iter().enumerate() {
                self.write_record(start + offset, record)?;
            }
            self.rendered = view.items.len();
        }

        if let Some(banner) = view.error_banner {
            if !self.banner_shown {
                match self.format {
                    OutputFormat::Json => writeln!(self.out, "{}", json!({ "error": banner }))?,
                    OutputFormat::Pretty => writeln!(self.out, "\n{banner}")?,
                }
                self.banner_shown = true;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Array(values) => values
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
