/// Implementation of `xfr pull`.
///
/// The download-with-progress flow over a local file: open the file as
/// an async byte source, drain it through `StreamCollector` while a
/// terminal progress line repaints on stderr, then optionally transcode
/// the collected bytes before writing them out.
///
/// The estimated size feeding the percentage comes from `fs::metadata`
/// unless `--size` overrides it. An estimate that undershoots makes the
/// percentage run past 100; the collector does not clamp.
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result};
use xfr_charset::TranscodeRequest;
use xfr_stream::StreamCollector;

use crate::PullArgs;
use crate::term_progress::TermProgress;

/// Run the `xfr pull` command.
///
/// # Errors
///
/// Returns an error when the file cannot be statted or read, the
/// post-transfer conversion fails, or the output cannot be written.
pub fn run(args: &PullArgs) -> Result<()> {
    let estimated = match args.size {
        Some(size) => size,
        None => fs::metadata(&args.file)
            .with_context(|| format!("cannot stat {}", args.file.display()))?
            .len(),
    };

    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    let source = tokio::fs::File::open(args.file.clone());

    let collected = if args.quiet {
        runtime.block_on(StreamCollector::new(estimated).collect(source))
    } else {
        let mut bar = TermProgress::new();
        runtime.block_on(
            StreamCollector::new(estimated)
                .with_sink(&mut bar)
                .collect(source),
        )
    }
    .with_context(|| format!("transfer of {} failed", args.file.display()))?;

    let output = if args.from.is_none() && args.to.is_none() {
        collected.to_vec()
    } else {
        let mut request = TranscodeRequest::new(collected.to_vec());
        if let Some(from) = &args.from {
            request = request.from_encoding(from);
        }
        if let Some(to) = &args.to {
            request = request.to_encoding(to);
        }
        request
            .convert()
            .context("post-transfer conversion failed")?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("cannot write {}", path.display()))
        }
        None => io::stdout()
            .lock()
            .write_all(&output)
            .context("cannot write to stdout"),
    }
}
