//! bwxml – decoder for BigWorld packed-section binaries.
//!
//! Packed Sections sind Container fuer XML-artige Records: ein
//! 4-Byte-Magic, ein reserviertes Byte, ein NUL-terminiertes
//! Namens-Dictionary und danach ein rekursiv codiertes Wurzelelement
//! mit gepackten (End-Offset, Typ-Tag)-Descriptoren. Dieses Crate
//! decodiert das Format in einen generischen [`Node`]-Baum, der per
//! Pfad abgefragt und nach XML oder JSON serialisiert werden kann.
//! Ein Encoder existiert bewusst nicht.
//!
//! # Beispiel
//!
//! ```
//! use bwxml::{decode_section, xml_serializer};
//!
//! let data: &[u8] = &[
//!     0x45, 0x4E, 0xA1, 0x62, 0x00,                   // Magic + Reserved
//!     b's', b'p', b'e', b'e', b'd', 0x00, 0x00,       // Dictionary ["speed"]
//!     0x01, 0x00,                                     // 1 Kind
//!     0x00, 0x00, 0x00, 0x10,                         // self: String, End 0
//!     0x00, 0x00, 0x02, 0x00, 0x00, 0x20,             // speed: Integer, End 2
//!     0x2C, 0x01,                                     // 300
//! ];
//!
//! let root = decode_section(data, "vehicle").unwrap();
//! assert_eq!(root.parse_i32("speed"), Some(300));
//! assert_eq!(
//!     xml_serializer::to_xml(&root).unwrap(),
//!     "<vehicle><speed>300</speed></vehicle>"
//! );
//! ```

pub mod bytestream;
pub mod decoder;
pub mod descriptor;
pub mod dictionary;
pub mod error;
pub mod header;
pub mod json;
pub mod node;
pub mod options;
pub mod xml_serializer;

pub use error::{Error, Result};

// Public API: Decoder
pub use decoder::{
    decode_file, decode_file_with_options, decode_section, decode_section_with_options, Decoder,
};

// Public API: Types
pub use bytestream::ByteReader;
pub use dictionary::Dictionary;
pub use header::{probe, SectionFormat, PACKED_SECTION_MAGIC, PRIMITIVES_MAGIC};
pub use node::Node;
pub use options::{DecodeOptions, ReadMode};
