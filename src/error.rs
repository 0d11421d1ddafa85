//! Central error types for the packed-section decoder.
//!
//! Fatale Fehler brechen das Decodieren des gesamten Records ab (kein
//! Partial-Tree-Recovery). Weiche Anomalien (Under-Reads im
//! Permissive-Modus) werden nicht hier abgebildet, sondern als
//! `log::warn!` + Sentinel-Wert im [`crate::bytestream::ByteReader`].

use core::fmt;

/// All failure conditions of the packed-section decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The leading 4-byte magic matches neither the packed-section nor
    /// the primitives signature.
    UnrecognizedHeader(u32),
    /// The magic selects the primitives format, which is handled by a
    /// sibling decoder and not by this crate.
    PrimitivesUnsupported,
    /// The stream ended before a bounded read could complete.
    ///
    /// Im Permissive-Modus liefern 2-/4-Byte-Reads stattdessen den
    /// Sentinel -1 und loggen eine Warnung (Legacy-Verhalten).
    UnexpectedEof {
        /// Byte offset at which the read started.
        offset: usize,
        /// Number of bytes the read required.
        wanted: usize,
    },
    /// A dictionary name has no terminating NUL within the 256-byte cap.
    NameTooLong {
        /// Byte offset at which the name starts.
        offset: usize,
    },
    /// A child slot references a name index outside the dictionary.
    NameIndexOutOfRange {
        /// Der referenzierte Index (kann durch Permissive-Sentinels
        /// auch -1 sein).
        index: i32,
        /// Anzahl Eintraege im Dictionary.
        len: usize,
    },
    /// An element announced a negative child count.
    InvalidChildCount {
        count: i32,
        /// Byte offset after the count field was read.
        offset: usize,
    },
    /// A descriptor carries a type tag outside 0..=5.
    ///
    /// Traegt den Element-Namen, die Descriptor-Darstellung
    /// (`[0xEND, 0xTYPE]@0xADDR`) und einen Hex-Dump der Bytes an der
    /// aktuellen Cursor-Position.
    UnknownTypeTag {
        name: String,
        descriptor: String,
        dump: String,
    },
    /// A one-byte boolean value was present but not equal to 1.
    InvalidBoolean { name: String, value: i8 },
    /// A descriptor end lies before the running offset (inverted value
    /// range), so the value length would be negative.
    InvalidValueLength {
        name: String,
        offset: u32,
        end: u32,
    },
    /// An IO error while reading a section from disk.
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedHeader(magic) => {
                write!(f, "unrecognized section header 0x{magic:08x}")
            }
            Self::PrimitivesUnsupported => {
                write!(f, "primitives section detected; handled by a separate decoder")
            }
            Self::UnexpectedEof { offset, wanted } => {
                write!(f, "reading {wanted} byte(s) at offset {offset} past the end of the stream")
            }
            Self::NameTooLong { offset } => {
                write!(f, "dictionary name at offset {offset} exceeds 256 bytes without terminator")
            }
            Self::NameIndexOutOfRange { index, len } => {
                write!(f, "name index {index} outside dictionary of {len} entries")
            }
            Self::InvalidChildCount { count, offset } => {
                write!(f, "invalid child count {count} at offset {offset}")
            }
            Self::UnknownTypeTag { name, descriptor, dump } => {
                write!(f, "unknown type of \"{name}\": {descriptor} {dump}")
            }
            Self::InvalidBoolean { name, value } => {
                write!(f, "boolean error in \"{name}\": byte value {value}, expected 1")
            }
            Self::InvalidValueLength { name, offset, end } => {
                write!(f, "value of \"{name}\" ends at 0x{end:x} before running offset 0x{offset:x}")
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
