//! Script execution.

use std::io::Write;

use giftstore_core::Catalog;
use tracing::{debug, warn};

use crate::formatter::Formatter;
use crate::script::Step;

/// Outcome of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed.
    pub steps: usize,
    /// Steps the catalog rejected.
    pub rejected: usize,
}

/// Runs script steps against a catalog, writing formatted output.
pub struct Executor<'a, W: Write> {
    catalog: &'a mut Catalog,
    formatter: &'a dyn Formatter,
    out: W,
    sections: usize,
}

impl<'a, W: Write> Executor<'a, W> {
    /// Create an executor.
    pub fn new(catalog: &'a mut Catalog, formatter: &'a dyn Formatter, out: W) -> Self {
        Self {
            catalog,
            formatter,
            out,
            sections: 0,
        }
    }

    /// Execute every step in order.
    ///
    /// Rejected catalog operations are reported through the formatter and do
    /// not stop the run. Only write failures are returned.
    pub fn run(&mut self, steps: &[Step]) -> std::io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for step in steps {
            if !self.execute(step)? {
                summary.rejected += 1;
            }
            summary.steps += 1;
        }

        self.out.flush()?;
        Ok(summary)
    }

    /// Execute one step. Returns `false` if the catalog rejected it.
    pub fn execute(&mut self, step: &Step) -> std::io::Result<bool> {
        debug!(?step, "executing step");

        let result = match step {
            Step::Section { title } => {
                let output = self.formatter.format_section(title, self.sections == 0);
                self.sections += 1;
                self.emit(&output)?;
                Ok(())
            }
            Step::ShowAll => {
                let output = self.formatter.format_catalog(self.catalog);
                self.emit(&output)?;
                Ok(())
            }
            Step::ShowTotal => {
                let output = self.formatter.format_total(self.catalog.total_units());
                self.emit(&output)?;
                Ok(())
            }
            Step::CheckDrift => {
                let drift = self.catalog.drift();
                if drift != 0 {
                    warn!(drift, "running total differs from actual units");
                }
                let output = self.formatter.format_drift(self.catalog);
                self.emit(&output)?;
                Ok(())
            }
            Step::Find { name } => {
                let output = self
                    .formatter
                    .format_lookup(name, self.catalog.find_by_name(name));
                self.emit(&output)?;
                Ok(())
            }
            Step::Add { gift } => {
                self.catalog.add(gift.clone());
                Ok(())
            }
            Step::Sort => {
                self.catalog.sort_by_name();
                Ok(())
            }
            Step::Update { position, update } => {
                self.catalog.update_at(*position, update.clone())
            }
            Step::Adjust { position, delta } => {
                self.catalog.adjust_quantity_at(*position, *delta)
            }
        };

        match result {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!(error = %e, "step rejected");
                let output = self.formatter.format_error(&e);
                self.emit(&output)?;
                Ok(false)
            }
        }
    }

    fn emit(&mut self, output: &str) -> std::io::Result<()> {
        self.out.write_all(output.as_bytes())
    }
}

/// Run `steps` against `catalog`, writing to `out`.
pub fn run<W: Write>(
    catalog: &mut Catalog,
    steps: &[Step],
    formatter: &dyn Formatter,
    out: W,
) -> std::io::Result<RunSummary> {
    Executor::new(catalog, formatter, out).run(steps)
}
