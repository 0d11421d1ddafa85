//! Section header and format dispatch.
//!
//! Jede Datei beginnt mit einem 4-Byte-Magic (little-endian):
//! - `0x62A14E45` - Packed Section, von diesem Crate decodiert. Danach
//!   folgt genau ein reserviertes Versions-Byte, das nicht weiter
//!   interpretiert wird, dann das Dictionary.
//! - `0x42A14E65` - Primitives-Format (flache Primitive-Listen), von
//!   einem Geschwister-Decoder behandelt und hier nur erkannt.
//!
//! Alles andere ist kein bekanntes Section-Format.

use crate::bytestream::ByteReader;
use crate::{Error, Result};

/// Magic selecting the packed-section decoder.
pub const PACKED_SECTION_MAGIC: u32 = 0x62A1_4E45;

/// Magic of the sibling primitives format (recognized, not decoded).
pub const PRIMITIVES_MAGIC: u32 = 0x42A1_4E65;

/// Which decoder a section's magic selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionFormat {
    /// Packed section (dictionary + recursive elements).
    Packed,
    /// Flat primitives list, handled elsewhere.
    Primitives,
}

/// Reads and classifies the 4-byte magic.
///
/// # Errors
///
/// [`Error::UnrecognizedHeader`] wenn das Magic keinem der beiden
/// Formate entspricht.
pub fn read_section_format(reader: &mut ByteReader<'_>) -> Result<SectionFormat> {
    let magic = reader.read_i32_le()? as u32;
    match magic {
        PACKED_SECTION_MAGIC => Ok(SectionFormat::Packed),
        PRIMITIVES_MAGIC => Ok(SectionFormat::Primitives),
        other => Err(Error::UnrecognizedHeader(other)),
    }
}

/// Classifies a byte slice by its magic without consuming anything.
///
/// `None` wenn die Quelle kuerzer als 4 Bytes ist oder keines der
/// bekannten Magics traegt.
pub fn probe(data: &[u8]) -> Option<SectionFormat> {
    let magic = u32::from_le_bytes(data.get(..4)?.try_into().ok()?);
    match magic {
        PACKED_SECTION_MAGIC => Some(SectionFormat::Packed),
        PRIMITIVES_MAGIC => Some(SectionFormat::Primitives),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_magic_bytes() {
        // LE-Darstellung von 0x62A14E45
        let data = [0x45, 0x4E, 0xA1, 0x62, 0xAA];
        let mut r = ByteReader::new(&data);
        assert_eq!(read_section_format(&mut r).unwrap(), SectionFormat::Packed);
        assert_eq!(r.position(), 4);
    }

    #[test]
    fn primitives_magic_bytes() {
        let data = [0x65, 0x4E, 0xA1, 0x42];
        let mut r = ByteReader::new(&data);
        assert_eq!(read_section_format(&mut r).unwrap(), SectionFormat::Primitives);
    }

    #[test]
    fn unknown_magic_is_rejected() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF];
        let mut r = ByteReader::new(&data);
        assert_eq!(
            read_section_format(&mut r).unwrap_err(),
            Error::UnrecognizedHeader(0xEFBE_ADDE)
        );
    }

    #[test]
    fn short_stream_is_eof() {
        let mut r = ByteReader::new(&[0x45, 0x4E]);
        assert!(matches!(
            read_section_format(&mut r).unwrap_err(),
            Error::UnexpectedEof { .. }
        ));
    }

    // --- probe ---

    #[test]
    fn probe_recognizes_both_formats() {
        assert_eq!(probe(&[0x45, 0x4E, 0xA1, 0x62]), Some(SectionFormat::Packed));
        assert_eq!(probe(&[0x65, 0x4E, 0xA1, 0x42]), Some(SectionFormat::Primitives));
    }

    #[test]
    fn probe_rejects_unknown_and_short() {
        assert_eq!(probe(&[1, 2, 3, 4]), None);
        assert_eq!(probe(&[0x45, 0x4E, 0xA1]), None);
        assert_eq!(probe(&[]), None);
    }
}
