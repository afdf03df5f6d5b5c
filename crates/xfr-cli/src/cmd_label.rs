/// Implementation of `xfr label`.
///
/// Canonicalizes each supplied name through the alias rules and checks
/// the result against the codec registry. Normalization is total, so a
/// name is never rejected; it is only reported as unsupported.
///
/// ```text
/// $ xfr label latin1 win-1252 banana
/// latin1 -> ISO-8859-1 [supported]
/// win-1252 -> WINDOWS-1252 [supported]
/// banana -> BANANA [unsupported]
/// ```
use anyhow::{Context, Result};
use serde::Serialize;
use xfr_charset::{codec, normalize};

use crate::LabelArgs;

/// One name's resolution, in the shape emitted by `--json`.
#[derive(Serialize)]
struct LabelReport<'a> {
    input: &'a str,
    canonical: String,
    supported: bool,
}

/// Run the `xfr label` command.
///
/// # Errors
///
/// Only JSON serialization can fail; the lookups themselves are reported
/// in-band as `supported: false`.
pub fn run(args: &LabelArgs) -> Result<()> {
    let reports: Vec<LabelReport<'_>> = args
        .names
        .iter()
        .map(|name| {
            let canonical = normalize(name);
            let supported = codec::lookup(&canonical).is_ok();
            LabelReport {
                input: name,
                canonical,
                supported,
            }
        })
        .collect();

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&reports).context("cannot serialize label report")?;
        println!("{rendered}");
    } else {
        for report in &reports {
            let status = if report.supported {
                "supported"
            } else {
                "unsupported"
            };
            println!("{} -> {} [{status}]", report.input, report.canonical);
        }
    }

    Ok(())
}
