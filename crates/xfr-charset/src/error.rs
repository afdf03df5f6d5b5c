/// Errors that can occur during transcoding.
///
/// Normalization is total and never produces an error; the only failure
/// mode in this crate is asking the codec capability for a name it does
/// not recognise. The offending name is carried verbatim so callers can
/// report exactly what was requested.
#[derive(Debug, thiserror::Error)]
pub enum CharsetError {
    /// The canonical name has no known codec.
    ///
    /// Raised by [`codec::lookup`](crate::codec::lookup) after alias
    /// resolution, which means `name` is already in canonical form when
    /// it appears here (e.g. a user's `latin-1` surfaces as `ISO-8859-1`
    /// only if that lookup itself were to fail).
    #[error("unsupported encoding {name:?}")]
    UnsupportedEncoding { name: String },
}
