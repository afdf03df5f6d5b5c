//! The codec capability: name-addressed decode/encode.
//!
//! This is a thin shim over [`encoding_rs`]. Canonical names from
//! [`label::normalize`](crate::label::normalize) are resolved to a static
//! codec through the WHATWG label registry, and decoding/encoding is
//! delegated wholesale; this crate owns no codec tables of its own.
//!
//! Two spelling gaps between the canonical names and the WHATWG registry
//! are bridged explicitly:
//!
//! ```text
//!   "CP949"  ──▶ EUC-KR        (the registry spells it "windows-949")
//!   "ASCII"  ──▶ windows-1252  (via the registry's "us-ascii" label;
//!                               a strict superset on the 7-bit range)
//! ```
//!
//! Malformed input decodes with U+FFFD replacement and unmappable output
//! characters encode as numeric character references, per the underlying
//! codec's policy.

use encoding_rs::Encoding;

use crate::error::CharsetError;

/// Resolve a canonical encoding name to its codec.
///
/// # Errors
///
/// Returns [`CharsetError::UnsupportedEncoding`] when the name matches no
/// label the codec registry knows. The name travels into the error
/// verbatim.
pub fn lookup(canonical: &str) -> Result<&'static Encoding, CharsetError> {
    if canonical.eq_ignore_ascii_case("CP949") {
        return Ok(encoding_rs::EUC_KR);
    }
    Encoding::for_label(canonical.as_bytes()).ok_or_else(|| CharsetError::UnsupportedEncoding {
        name: canonical.to_string(),
    })
}

/// Decode `bytes` from the named encoding into a UTF-8 string.
///
/// A leading BOM matching the encoding is stripped. Malformed sequences
/// are replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Fails only when `name` resolves to no codec.
pub fn decode(bytes: &[u8], name: &str) -> Result<String, CharsetError> {
    let codec = lookup(name)?;
    // BOM removal only, never BOM sniffing: a UTF-8 BOM in front of
    // windows-1252 data is three windows-1252 bytes, not a signal to
    // switch codecs.
    let (text, _) = codec.decode_with_bom_removal(bytes);
    Ok(text.into_owned())
}

/// Encode a UTF-8 string into the named encoding.
///
/// # Errors
///
/// Fails only when `name` resolves to no codec.
pub fn encode(text: &str, name: &str) -> Result<Vec<u8>, CharsetError> {
    let codec = lookup(name)?;
    let (bytes, _, _) = codec.encode(text);
    Ok(bytes.into_owned())
}
