//! High-level decode entry points.

use std::fs;
use std::path::Path;

use crate::bytestream::ByteReader;
use crate::dictionary::Dictionary;
use crate::header::{read_section_format, SectionFormat};
use crate::node::Node;
use crate::options::DecodeOptions;
use crate::{Error, Result};

use super::Decoder;

/// Decodes a packed section from memory with default options.
///
/// Das Wurzelelement traegt keinen Dictionary-Namen; `root_name` kommt
/// vom Aufrufer (typisch: der Datei- oder Record-Bezeichner).
pub fn decode_section(data: &[u8], root_name: &str) -> Result<Node> {
    decode_section_with_options(data, root_name, DecodeOptions::default())
}

/// Decodes a packed section from memory.
///
/// # Errors
///
/// - [`Error::PrimitivesUnsupported`] wenn das Magic das
///   Primitives-Format auswaehlt.
/// - [`Error::UnrecognizedHeader`] bei unbekanntem Magic.
/// - Alle Decode-Fehler des Element-Decoders.
pub fn decode_section_with_options(
    data: &[u8],
    root_name: &str,
    options: DecodeOptions,
) -> Result<Node> {
    let mut reader = ByteReader::with_mode(data, options.read_mode);

    match read_section_format(&mut reader)? {
        SectionFormat::Packed => {}
        SectionFormat::Primitives => return Err(Error::PrimitivesUnsupported),
    }

    // Ein reserviertes Versions-Byte, nicht weiter interpretiert.
    let _reserved = reader.read_u8()?;

    let dictionary = Dictionary::read(&mut reader)?;

    let mut root = Node::new(root_name);
    let mut decoder = Decoder::new(reader, dictionary);
    decoder.decode_element(&mut root)?;
    Ok(root)
}

/// Reads and decodes a packed-section file with default options.
///
/// The root node is labeled with the file stem.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Node> {
    decode_file_with_options(path, DecodeOptions::default())
}

/// Reads and decodes a packed-section file.
pub fn decode_file_with_options(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Node> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    let root_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "section".to_owned());
    decode_section_with_options(&data, &root_name, options)
}
