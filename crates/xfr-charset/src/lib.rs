#![warn(clippy::pedantic)]

//! Character-set name normalization and byte transcoding.
//!
//! The crate has two layers:
//!
//! ```text
//!   label::normalize  ──▶ canonical encoding name (total, permissive)
//!          │
//!   codec::lookup     ──▶ &'static encoding_rs::Encoding (fallible)
//!          │
//!   convert           ──▶ byte-to-byte transcoding through the UTF-8 pivot
//! ```
//!
//! Normalization never fails; unrecognized names pass through trimmed and
//! uppercased, and the question of whether a name denotes a real codec is
//! deferred to the lookup. The transcoder short-circuits same-encoding
//! requests without ever consulting the codec, so `convert(b, e, e)` works
//! even for names no codec supports.

pub mod codec;
pub mod convert;
pub mod error;
pub mod label;

pub use convert::{ByteSequence, TranscodeRequest, convert};
pub use error::CharsetError;
pub use label::normalize;
