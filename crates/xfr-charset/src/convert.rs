//! The transcoder: byte-to-byte conversion through the UTF-8 pivot.
//!
//! Conversion is addressed purely by encoding name. Both endpoint names
//! are normalized first; the algorithm then takes one of four paths:
//!
//! ```text
//!   from == to            ──▶ input bytes unchanged (codec never consulted)
//!   to   == UTF-8         ──▶ decode(input, from)
//!   from == UTF-8         ──▶ encode(input as text, to)
//!   neither is UTF-8      ──▶ encode(decode(input, from), to)
//! ```
//!
//! The last path makes UTF-8 the mandatory pivot: there is no direct
//! table between two non-UTF-8 encodings.
//!
//! Input is an explicit text-or-bytes sum type. A textual input whose
//! `from` encoding is not UTF-8 is reinterpreted as raw bytes (one byte
//! per scalar value, low eight bits) *before* any other step, including
//! the same-encoding short-circuit; the text is semantically already in
//! the `from` encoding and must not be decoded twice.

use crate::codec;
use crate::error::CharsetError;
use crate::label::normalize;

/// The canonical pivot encoding.
const UTF_8_NAME: &str = "UTF-8";

/// A conversion input: either a text value or a raw byte buffer.
///
/// The transcoder branches on this tag exactly once, at the reinterpret
/// step; everywhere else the two representations flow uniformly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ByteSequence {
    /// A UTF-8 text value (or, when `from` is non-UTF-8, a text value
    /// whose scalar values stand for single bytes).
    Text(String),
    /// A raw byte buffer, already in the `from` encoding.
    Raw(Vec<u8>),
}

impl Default for ByteSequence {
    /// An absent input defaults to the empty byte buffer.
    fn default() -> Self {
        ByteSequence::Raw(Vec::new())
    }
}

impl From<String> for ByteSequence {
    fn from(s: String) -> Self {
        ByteSequence::Text(s)
    }
}

impl From<&str> for ByteSequence {
    fn from(s: &str) -> Self {
        ByteSequence::Text(s.to_string())
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(b: Vec<u8>) -> Self {
        ByteSequence::Raw(b)
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(b: &[u8]) -> Self {
        ByteSequence::Raw(b.to_vec())
    }
}

impl ByteSequence {
    /// Flatten to bytes: text becomes its UTF-8 bytes, raw passes through.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ByteSequence::Text(s) => s.into_bytes(),
            ByteSequence::Raw(b) => b,
        }
    }

    /// Bytes for a decode step. Raw passes through; text (only reachable
    /// here when it stands for single-byte data) is read one byte per
    /// scalar value.
    fn into_binary(self) -> Vec<u8> {
        match self {
            ByteSequence::Text(s) => binary_passthrough(&s),
            ByteSequence::Raw(b) => b,
        }
    }

    /// Text for an encode step. Raw buffers are interpreted as UTF-8,
    /// lossily; this mirrors how a byte buffer handed to a text encoder
    /// is stringified in the original behavior.
    fn into_utf8_text(self) -> String {
        match self {
            ByteSequence::Text(s) => s,
            ByteSequence::Raw(b) => String::from_utf8_lossy(&b).into_owned(),
        }
    }
}

/// One-byte-per-character reinterpretation of a text value.
///
/// Each scalar value contributes its low eight bits. Values above 0xFF
/// are truncated, matching a binary (latin-1 style) passthrough.
#[allow(clippy::cast_possible_truncation)]
fn binary_passthrough(s: &str) -> Vec<u8> {
    s.chars().map(|c| (c as u32 & 0xFF) as u8).collect()
}

/// A transcoding request: input plus the two endpoint encoding names.
///
/// Absent pieces take their documented defaults: the input defaults to
/// an empty byte buffer, and either endpoint name defaults to `UTF-8`.
/// An explicitly supplied empty (or all-whitespace) name is treated as
/// absent.
///
/// ```rust
/// use xfr_charset::TranscodeRequest;
///
/// let euro = TranscodeRequest::new("\u{20ac}")
///     .to_encoding("windows-1252")
///     .convert()
///     .unwrap();
/// assert_eq!(euro, [0x80]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TranscodeRequest {
    input: ByteSequence,
    from: Option<String>,
    to: Option<String>,
}

impl TranscodeRequest {
    /// Start a request for the given input.
    pub fn new(input: impl Into<ByteSequence>) -> Self {
        Self {
            input: input.into(),
            from: None,
            to: None,
        }
    }

    /// Set the source encoding name (any alias spelling).
    #[must_use]
    pub fn from_encoding(mut self, name: impl Into<String>) -> Self {
        self.from = Some(name.into());
        self
    }

    /// Set the target encoding name (any alias spelling).
    #[must_use]
    pub fn to_encoding(mut self, name: impl Into<String>) -> Self {
        self.to = Some(name.into());
        self
    }

    /// Run the conversion, producing the output byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CharsetError::UnsupportedEncoding`] when a dispatched
    /// endpoint name has no codec. Same-encoding requests short-circuit
    /// before any lookup and therefore never fail.
    pub fn convert(self) -> Result<Vec<u8>, CharsetError> {
        let from = resolve_name(self.from.as_deref());
        let to = resolve_name(self.to.as_deref());

        // Text already in a non-UTF-8 `from` encoding is carried as its
        // raw code-unit bytes so the codec never double-decodes it. This
        // must happen before the short-circuit below.
        let input = if from == UTF_8_NAME {
            self.input
        } else {
            match self.input {
                ByteSequence::Text(s) => ByteSequence::Raw(binary_passthrough(&s)),
                raw => raw,
            }
        };

        // Same-encoding requests never consult the codec.
        if from == to {
            return Ok(input.into_bytes());
        }

        let converted = if to == UTF_8_NAME {
            ByteSequence::Text(codec::decode(&input.into_binary(), &from)?)
        } else if from == UTF_8_NAME {
            ByteSequence::Raw(codec::encode(&input.into_utf8_text(), &to)?)
        } else {
            // UTF-8 is the mandatory pivot between two non-UTF-8 endpoints.
            let pivot = codec::decode(&input.into_binary(), &from)?;
            ByteSequence::Raw(codec::encode(&pivot, &to)?)
        };

        Ok(converted.into_bytes())
    }
}

/// Apply the absent-name default, then normalize.
fn resolve_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => normalize(n),
        _ => UTF_8_NAME.to_string(),
    }
}

/// Convert `input` from the `from` encoding to the `to` encoding.
///
/// Convenience wrapper over [`TranscodeRequest`] for the common
/// both-names-known call shape. Empty names default to `UTF-8`.
///
/// # Errors
///
/// Same as [`TranscodeRequest::convert`].
pub fn convert(
    input: impl Into<ByteSequence>,
    to: &str,
    from: &str,
) -> Result<Vec<u8>, CharsetError> {
    TranscodeRequest::new(input)
        .to_encoding(to)
        .from_encoding(from)
        .convert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_short_circuit_skips_codec() {
        // The name is not a real codec; success proves no dispatch happened.
        let out = convert(&b"\x01\x02\xff"[..], "no-such-charset", "no-such-charset").unwrap();
        assert_eq!(out, [0x01, 0x02, 0xff]);
    }

    #[test]
    fn identity_with_text_input_yields_utf8_bytes() {
        let out = convert("caf\u{e9}", "utf8", "UTF-8").unwrap();
        assert_eq!(out, "caf\u{e9}".as_bytes());
    }

    #[test]
    fn decode_path_latin1_to_utf8() {
        let out = convert(&b"caf\xe9"[..], "utf-8", "latin1").unwrap();
        assert_eq!(out, "caf\u{e9}".as_bytes());
    }

    #[test]
    fn encode_path_utf8_to_windows_1252() {
        let out = convert("\u{20ac} 5", "windows-1252", "utf8").unwrap();
        assert_eq!(out, b"\x80 5");
    }

    #[test]
    fn pivot_path_between_two_non_utf8_endpoints() {
        // ISO-8859-1 and WINDOWS-1252 differ by name, so this dispatches
        // through the decode-then-encode pivot.
        let out = convert(&b"caf\xe9"[..], "windows-1252", "latin1").unwrap();
        assert_eq!(out, b"caf\xe9");
    }

    #[test]
    fn text_input_with_non_utf8_from_is_reinterpreted() {
        // The '\u{e9}' scalar stands for the single byte 0xE9 in the
        // declared latin-1 source, not for its two UTF-8 bytes.
        let out = convert("caf\u{e9}", "utf8", "latin1").unwrap();
        assert_eq!(out, "caf\u{e9}".as_bytes());
    }

    #[test]
    fn text_input_with_non_utf8_identity_is_reinterpreted_too() {
        let out = convert("caf\u{e9}", "latin1", "latin1").unwrap();
        assert_eq!(out, b"caf\xe9");
    }

    #[test]
    fn absent_names_default_to_utf8() {
        let out = TranscodeRequest::new("hi").convert().unwrap();
        assert_eq!(out, b"hi");
        let out = convert(&b"caf\xe9"[..], "", "latin1").unwrap();
        assert_eq!(out, "caf\u{e9}".as_bytes());
    }

    #[test]
    fn absent_input_defaults_to_empty() {
        let out = TranscodeRequest::default()
            .to_encoding("windows-1252")
            .convert()
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn unsupported_endpoint_surfaces_error() {
        let err = convert(&b"x"[..], "no-such-charset", "utf8").unwrap_err();
        assert!(matches!(
            err,
            CharsetError::UnsupportedEncoding { ref name } if name == "NO-SUCH-CHARSET"
        ));
    }

    #[test]
    fn binary_passthrough_truncates_to_low_byte() {
        assert_eq!(binary_passthrough("A\u{e9}\u{20ac}"), [0x41, 0xe9, 0xac]);
    }
}
