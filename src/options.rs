//! Decode options.
//!
//! Das historische Leseverhalten war inkonsistent: 2-/4-Byte-Reads waren
//! bounds-checked und lieferten bei Under-Read den Sentinel -1 plus eine
//! Konsolen-Warnung, alle anderen Reads liefen ungeprueft ins Stream-Ende.
//! Hier ist das als ein einziger konfigurierbarer [`ReadMode`] modelliert
//! statt zeilenweise reproduziert.

/// How the byte reader treats 2-/4-byte reads past the end of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// All reads are checked; an under-read is
    /// [`crate::Error::UnexpectedEof`].
    #[default]
    Strict,
    /// Legacy-compatible: 2-/4-byte reads past the end return the
    /// sentinel -1 and log a warning, and decoding continues with
    /// corrupted offset math. Useful for regression against historical
    /// inputs that happened to decode despite truncation.
    Permissive,
}

/// Options consumed by the section decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Under-Read-Verhalten des Byte-Readers.
    pub read_mode: ReadMode,
}

impl DecodeOptions {
    /// Creates the default options (strict reads).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read mode.
    pub fn with_read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    /// Shorthand for the legacy-compatible permissive mode.
    pub fn permissive() -> Self {
        Self::new().with_read_mode(ReadMode::Permissive)
    }
}
