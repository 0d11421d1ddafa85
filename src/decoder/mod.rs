//! Recursive packed-section element decoder.
//!
//! Ein Element ist im Stream so codiert:
//!
//! ```text
//! [child count: i16 LE]
//! [self descriptor: i32 LE]
//! [count x (name index: i16 LE + descriptor: i32 LE)]
//! [self value bytes][child 0 value bytes][child 1 value bytes]...
//! ```
//!
//! Laengen sind implizit: jeder Descriptor traegt nur den End-Offset
//! innerhalb der Byte-Region des Elements, die Laenge eines Werts ist
//! die Differenz zum laufenden Offset des vorherigen Geschwisters
//! (Start: Ende des Self-Werts, der bei Offset 0 beginnt). Verschachtelte
//! Elemente (Tag 0) beschreiben sich ueber ihren eigenen Count-Header
//! selbst; ihre Descriptor-Laenge wird berechnet, aber nicht benutzt.
//!
//! # Beispiel
//!
//! ```
//! use bwxml::decode_section;
//!
//! // Header + Dictionary ["speed"] + ein Element mit einem i16-Kind
//! let data: &[u8] = &[
//!     0x45, 0x4E, 0xA1, 0x62, 0x00,                   // Magic + Reserved
//!     b's', b'p', b'e', b'e', b'd', 0x00, 0x00,       // Dictionary
//!     0x01, 0x00,                                     // 1 Kind
//!     0x00, 0x00, 0x00, 0x10,                         // self: String, End 0
//!     0x00, 0x00, 0x02, 0x00, 0x00, 0x20,             // Kind 0: Integer, End 2
//!     0x2C, 0x01,                                     // 300
//! ];
//! let root = decode_section(data, "vehicle").unwrap();
//! assert_eq!(root.parse_i32("speed"), Some(300));
//! ```

mod api;
mod value;

pub use api::{
    decode_file, decode_file_with_options, decode_section, decode_section_with_options,
};

use log::warn;

use crate::bytestream::ByteReader;
use crate::descriptor::{read_data_descriptor, read_element_descriptors};
use crate::dictionary::Dictionary;
use crate::node::Node;
use crate::{Error, Result};


/// Packed-section element decoder.
///
/// Besitzt den Reader exklusiv fuer die Dauer eines Decode-Laufs;
/// mehrere Sections lassen sich parallel decodieren, indem jede ihren
/// eigenen Reader bekommt.
pub struct Decoder<'a> {
    reader: ByteReader<'a>,
    dictionary: Dictionary,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over a reader positioned at an element start.
    pub fn new(reader: ByteReader<'a>, dictionary: Dictionary) -> Self {
        Self { reader, dictionary }
    }

    /// Decodes one element into `element`, recursing into nested
    /// elements as needed.
    pub fn decode_element(&mut self, element: &mut Node) -> Result<()> {
        let child_count = self.read_child_count()?;

        let self_descriptor = read_data_descriptor(&mut self.reader)?;
        let children = read_element_descriptors(&mut self.reader, child_count)?;

        // Self-Wert beginnt bei Offset 0 und setzt den laufenden Offset
        // auf sein Descriptor-Ende.
        let mut offset = self.decode_value(element, 0, &self_descriptor)?;

        for slot in &children {
            let name = self.dictionary.get(slot.name_index)?.to_owned();
            let mut child = Node::new(name);
            offset = self.decode_value(&mut child, offset, &slot.data)?;
            element.push_child(child);
        }

        Ok(())
    }

    /// Reads the child count, applying the zero-count recovery.
    fn read_child_count(&mut self) -> Result<u16> {
        let mut count = self.reader.read_i16_le()?;
        if count == 0 {
            count = self.recover_zero_child_count()?;
        }
        if count < 0 {
            return Err(Error::InvalidChildCount { count, offset: self.reader.position() });
        }
        Ok(count as u16)
    }

    /// Recovery strategy for records whose count field reads as 0:
    /// assume the stream is misaligned by 3 bytes, rewind and re-read.
    ///
    /// Das ist die unveraendert uebernommene Heuristik des Altbestands.
    /// Ob sie fuer alle kaputten Records korrekt ist, ist offen - sie
    /// ist deshalb hier isoliert, damit sie sich austauschen laesst.
    /// Liefert das Re-Read wieder 0, gilt das Element als kinderlos.
    fn recover_zero_child_count(&mut self) -> Result<i32> {
        warn!(
            "[bwxml] zero child count at offset {}; re-reading 3 bytes back (corrupted record?)",
            self.reader.position()
        );
        self.reader.rewind(3);
        self.reader.read_i16_le()
    }
}
