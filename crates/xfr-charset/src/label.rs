//! Encoding-name normalization.
//!
//! User-supplied charset names arrive in every imaginable spelling:
//! `latin1`, `Latin-1`, `win1252`, `windows_1252`, ` utf8 `. This module
//! folds them into a single canonical form so the rest of the crate can
//! compare names with plain string equality.
//!
//! ```text
//!   "latin1"          ──▶ "ISO-8859-1"
//!   "win-1252"        ──▶ "WINDOWS-1252"
//!   " utf8 "          ──▶ "UTF-8"
//!   "ks_c_5601-1987"  ──▶ "CP949"
//!   "us-ascii"        ──▶ "ASCII"
//!   "KOI8-R"          ──▶ "KOI8-R"   (no alias: trim + uppercase only)
//! ```
//!
//! Normalization is deliberately permissive: it is a total function and
//! never rejects a name. Whether the canonical result denotes a codec the
//! system actually supports is [`codec::lookup`](crate::codec::lookup)'s
//! concern, not this module's.

/// Canonicalize a charset name.
///
/// Trims surrounding whitespace, resolves the known alias families, and
/// uppercases the result. Idempotent: `normalize(normalize(n)) ==
/// normalize(n)` for every input. An empty (or all-whitespace) name
/// normalizes to the empty string; defaulting to UTF-8 happens in the
/// transcoder, not here.
#[must_use]
pub fn normalize(name: &str) -> String {
    let trimmed = name.trim();
    match rewrite_alias(trimmed) {
        Some(canonical) => canonical,
        None => trimmed.to_ascii_uppercase(),
    }
}

/// Apply the fixed, ordered alias rewrites.
///
/// Returns `None` when no alias family matches, in which case the caller
/// falls back to plain case normalization.
fn rewrite_alias(name: &str) -> Option<String> {
    if name.eq_ignore_ascii_case("ks_c_5601-1987") {
        return Some("CP949".to_string());
    }
    if name.eq_ignore_ascii_case("ascii")
        || name.eq_ignore_ascii_case("us-ascii")
        || name.eq_ignore_ascii_case("us_ascii")
    {
        return Some("ASCII".to_string());
    }
    if let Some(n) = numeric_suffix(name, "latin") {
        return Some(format!("ISO-8859-{n}"));
    }
    // "windows" must be tried before "win" so the separator-less
    // "windows1252" spelling is not parsed as win + "dows1252".
    if let Some(n) = numeric_suffix(name, "windows").or_else(|| numeric_suffix(name, "win")) {
        return Some(format!("WINDOWS-{n}"));
    }
    if let Some(n) = numeric_suffix(name, "utf") {
        return Some(format!("UTF-{n}"));
    }
    None
}

/// Match `family` + optional `-`/`_` separator + a non-empty run of
/// digits, returning the digits. `latin1`, `latin-1`, and `latin_1` all
/// yield `"1"`; `latin` alone and `latin-1x` do not match.
fn numeric_suffix<'a>(name: &'a str, family: &str) -> Option<&'a str> {
    let head = name.get(..family.len())?;
    if !head.eq_ignore_ascii_case(family) {
        return None;
    }
    let rest = &name[family.len()..];
    let rest = rest.strip_prefix(['-', '_']).unwrap_or(rest);
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}
