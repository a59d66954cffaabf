//! Human-readable progress output.
//!
//! Every check prints `Running: "<command>"... ` before it starts and
//! `Passed.` or `Failed.` when it ends; a failure also dumps the captured
//! output to the error stream. Revisions are introduced with
//! `Commit: <summary>` and separated by a rule.

use crate::invoke::{CheckOutcome, CommandSpec};
use crate::revision::Revision;
use std::io::{self, Stderr, Stdout, Write};

const SEPARATOR: &str = "==========================================";

/// Receives pipeline progress as it happens.
pub trait Progress {
    /// A revision is about to be checked out. `index` is zero-based.
    fn revision_started(&mut self, index: usize, revision: &Revision);

    /// An external check is about to run.
    fn check_started(&mut self, command: &CommandSpec);

    /// An external check finished.
    fn check_finished(&mut self, outcome: &CheckOutcome);
}

/// Writes progress to an output and an error stream.
pub struct ConsoleProgress<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleProgress<Stdout, Stderr> {
    /// Progress on the process's stdout/stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleProgress<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn report(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write progress");
        }
    }
}

impl<O: Write, E: Write> Progress for ConsoleProgress<O, E> {
    fn revision_started(&mut self, index: usize, revision: &Revision) {
        let result = (|| -> io::Result<()> {
            if index > 0 {
                write!(self.out, "\n{}\n\n", SEPARATOR)?;
            }
            writeln!(self.out, "Commit: {}", revision.summary)?;
            self.out.flush()
        })();
        self.report(result);
    }

    fn check_started(&mut self, command: &CommandSpec) {
        let result = (|| -> io::Result<()> {
            write!(self.out, "Running: \"{}\"... ", command.display())?;
            self.out.flush()
        })();
        self.report(result);
    }

    fn check_finished(&mut self, outcome: &CheckOutcome) {
        let result = (|| -> io::Result<()> {
            if outcome.passed {
                writeln!(self.out, "Passed.")?;
            } else {
                writeln!(self.out, "Failed.")?;
                self.out.flush()?;
                writeln!(self.err, "Output:\n{}", outcome.output)?;
            }
            self.out.flush()
        })();
        self.report(result);
    }
}

/// Discards all progress.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct NoProgress;

#[cfg(test)]
impl Progress for NoProgress {
    fn revision_started(&mut self, _index: usize, _revision: &Revision) {}
    fn check_started(&mut self, _command: &CommandSpec) {}
    fn check_finished(&mut self, _outcome: &CheckOutcome) {}
}
