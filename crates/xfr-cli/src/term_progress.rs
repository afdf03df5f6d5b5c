/// The terminal progress sink: a single repainting line on stderr.
///
/// Implements the `ProgressSink` contract for interactive use. Each
/// update rewrites the line in place with a carriage return; `end`
/// finishes the line so later output starts clean. Writes are
/// best-effort; a broken stderr never fails the transfer itself.
use std::io::{self, Write as _};

use xfr_stream::{ProgressSink, TransferTask};

/// Carriage-return progress line on stderr.
pub struct TermProgress {
    out: io::Stderr,
}

impl TermProgress {
    pub fn new() -> Self {
        Self { out: io::stderr() }
    }
}

impl Default for TermProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TermProgress {
    fn start(&mut self, task: &TransferTask) {
        let _ = write!(self.out, "{}\r", task.status_message);
        let _ = self.out.flush();
    }

    fn update(&mut self, task: &TransferTask) {
        let _ = write!(
            self.out,
            "{} ({:.1}%)\r",
            task.status_message, task.percent_complete
        );
        let _ = self.out.flush();
    }

    fn end(&mut self) {
        let _ = writeln!(self.out);
    }
}
