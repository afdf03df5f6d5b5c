/// Implementation of `xfr convert`.
///
/// Whole-buffer transcode: read everything, convert once, write the
/// result. Input comes from a file or stdin (`-`), output goes to a
/// file or stdout. The conversion itself is `xfr_charset`'s pipeline;
/// this module only does the I/O plumbing around it.
use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use xfr_charset::TranscodeRequest;

use crate::ConvertArgs;

/// Run the `xfr convert` command.
///
/// # Errors
///
/// Returns an error when the input cannot be read, either encoding name
/// has no codec, or the output cannot be written.
pub fn run(args: &ConvertArgs) -> Result<()> {
    let bytes = read_input(args.input.as_deref())?;

    let mut request = TranscodeRequest::new(bytes);
    if let Some(from) = &args.from {
        request = request.from_encoding(from);
    }
    if let Some(to) = &args.to {
        request = request.to_encoding(to);
    }
    let converted = request.convert().context("conversion failed")?;

    write_output(args.output.as_deref(), &converted)
}

/// Read the whole input: a named file, or stdin for `-`/absent.
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read(path).with_context(|| format!("cannot read {}", path.display()))
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("cannot read stdin")?;
            Ok(bytes)
        }
    }
}

/// Write the converted bytes: a named file, or raw bytes on stdout.
fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("cannot write {}", path.display()))
        }
        None => io::stdout()
            .lock()
            .write_all(bytes)
            .context("cannot write to stdout"),
    }
}
