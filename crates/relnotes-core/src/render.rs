//! Plain-text report rendering.

use std::fmt::Write;

use relnotes_commit::{CommitCollection, CommitRecord};

use crate::Report;

/// Document header for tag-bounded reports.
pub const SINCE_TAG_HEADER: &str = "Commits Since Last Tagged Commit:";

/// Document header for whole-history reports.
pub const ALL_COMMITS_HEADER: &str = "All commits:";

/// Renders commit collections as text.
#[derive(Debug, Clone)]
pub struct Renderer {
    by_modules: bool,
    include_modules: bool,
    date_format: String,
}

impl Renderer {
    /// Creates a renderer.
    ///
    /// `include_modules` only affects the flat layout.
    #[must_use]
    pub fn new(by_modules: bool, include_modules: bool, date_format: impl Into<String>) -> Self {
        Self {
            by_modules,
            include_modules,
            date_format: date_format.into(),
        }
    }

    /// Renders the whole document: header, then each section followed by a
    /// blank line.
    pub fn render_report(&self, report: &Report) -> String {
        let mut output = String::new();

        let header = if report.all_commits() {
            ALL_COMMITS_HEADER
        } else {
            SINCE_TAG_HEADER
        };
        _ = writeln!(output, "{header}");

        for section in report.sections() {
            output.push_str(&self.render_section(section));
            output.push('\n');
        }

        output
    }

    /// Renders one repository section in the configured layout.
    pub fn render_section(&self, collection: &CommitCollection) -> String {
        let mut output = String::new();
        _ = writeln!(output, "{}:", collection.label());

        if self.by_modules {
            for (module, records) in collection.group_by_module() {
                _ = writeln!(output, "\t{module}:");
                for record in records {
                    self.write_line(&mut output, record, false);
                }
            }
        } else {
            for record in collection {
                self.write_line(&mut output, record, self.include_modules);
            }
        }

        output
    }

    fn write_line(&self, output: &mut String, record: &CommitRecord, with_modules: bool) {
        let date = record.timestamp().format(&self.date_format);
        _ = write!(output, "\t\t{} - {date}", record.author());
        if with_modules {
            let modules: Vec<&str> = record.modules().iter().map(String::as_str).collect();
            _ = write!(output, " - [{}]", modules.join(", "));
        }
        _ = writeln!(output, " - {}", record.message());
    }
}
