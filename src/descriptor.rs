//! Packed value descriptors.
//!
//! Jeder Wert im Stream wird durch einen gepackten 32-Bit-Descriptor
//! beschrieben: die unteren 28 Bits tragen den End-Offset innerhalb der
//! Byte-Region des umgebenden Elements, das oberste Nibble den Typ-Tag.
//! Der Shift ist arithmetisch, ein 0xF-Nibble ergibt also den Tag -1
//! ("Slot nicht belegt"). Laengen sind nie explizit gespeichert - sie
//! ergeben sich aus der Differenz aufeinanderfolgender End-Offsets.

use core::fmt;

use crate::bytestream::ByteReader;
use crate::Result;

/// Mask for the 28-bit end offset in a raw descriptor word.
pub const END_MASK: i32 = 0x0FFF_FFFF;

/// Type tag: nested element.
pub const TAG_ELEMENT: i32 = 0x0;
/// Type tag: string value.
pub const TAG_STRING: i32 = 0x1;
/// Type tag: little-endian signed integer (1, 2 or 4 bytes).
pub const TAG_INTEGER: i32 = 0x2;
/// Type tag: array of little-endian 32-bit floats.
pub const TAG_FLOATS: i32 = 0x3;
/// Type tag: boolean.
pub const TAG_BOOLEAN: i32 = 0x4;
/// Type tag: opaque binary, rendered as base64.
pub const TAG_BLOB: i32 = 0x5;

/// Decoded (end-offset, type-tag) pair of one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataDescriptor {
    /// End offset of the value within the element's byte region.
    pub end: u32,
    /// Type tag 0..=5, or -1 for an absent slot.
    pub tag: i32,
    /// Cursor position right after the descriptor word was read.
    /// Nur Diagnose, steuert nichts.
    pub address: usize,
}

impl DataDescriptor {
    /// True when the slot is unoccupied (top nibble all ones).
    pub fn is_absent(&self) -> bool {
        self.tag == -1
    }
}

impl fmt::Display for DataDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:x}, 0x{:x}]@0x{:x}", self.end, self.tag, self.address)
    }
}

/// One child slot: dictionary name index plus the value descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub name_index: i32,
    pub data: DataDescriptor,
}

/// Reads one packed descriptor word.
pub fn read_data_descriptor(reader: &mut ByteReader<'_>) -> Result<DataDescriptor> {
    let raw = reader.read_i32_le()?;
    Ok(DataDescriptor {
        end: (raw & END_MASK) as u32,
        // Arithmetischer Shift: 0xF-Nibble → -1
        tag: raw >> 28,
        address: reader.position(),
    })
}

/// Reads `count` child slots, dropping the ones whose tag is -1.
///
/// Die Reihenfolge der uebrigen Slots bleibt die Deklarations-
/// Reihenfolge im Stream.
pub fn read_element_descriptors(
    reader: &mut ByteReader<'_>,
    count: u16,
) -> Result<Vec<ElementDescriptor>> {
    let mut slots = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let name_index = reader.read_i16_le()?;
        let data = read_data_descriptor(reader)?;
        if !data.is_absent() {
            slots.push(ElementDescriptor { name_index, data });
        }
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(bytes: &[u8]) -> DataDescriptor {
        let mut r = ByteReader::new(bytes);
        read_data_descriptor(&mut r).unwrap()
    }

    // --- Bit-Zerlegung ---

    #[test]
    fn splits_end_and_tag() {
        // raw = 0x2000_0017: Tag 2, End 0x17
        let d = read_one(&[0x17, 0x00, 0x00, 0x20]);
        assert_eq!(d.end, 0x17);
        assert_eq!(d.tag, TAG_INTEGER);
        assert!(!d.is_absent());
        assert_eq!(d.address, 4);
    }

    #[test]
    fn end_uses_all_28_bits() {
        // raw = 0x1FFF_FFFF: Tag 1, End 0x0FFF_FFFF
        let d = read_one(&[0xFF, 0xFF, 0xFF, 0x1F]);
        assert_eq!(d.end, 0x0FFF_FFFF);
        assert_eq!(d.tag, TAG_STRING);
    }

    /// Das oberste Nibble 0xF muss per arithmetischem Shift den Tag -1
    /// ergeben.
    #[test]
    fn all_ones_nibble_is_absent() {
        let d = read_one(&[0x05, 0x00, 0x00, 0xF0]);
        assert_eq!(d.tag, -1);
        assert!(d.is_absent());
        assert_eq!(d.end, 5);
    }

    /// Der Permissive-Sentinel -1 als Rohwort zerfaellt in End
    /// 0x0FFF_FFFF und Tag -1 - der Slot gilt als unbelegt.
    #[test]
    fn sentinel_word_is_absent() {
        let mut r = ByteReader::with_mode(&[], crate::ReadMode::Permissive);
        let d = read_data_descriptor(&mut r).unwrap();
        assert!(d.is_absent());
        assert_eq!(d.end, 0x0FFF_FFFF);
    }

    #[test]
    fn display_shape() {
        let d = DataDescriptor { end: 0x1F, tag: 0x6, address: 0x42 };
        assert_eq!(d.to_string(), "[0x1f, 0x6]@0x42");
    }

    #[test]
    fn display_absent_tag() {
        let d = DataDescriptor { end: 0, tag: -1, address: 0 };
        // i32-Hexdarstellung von -1, wie im Altbestand
        assert_eq!(d.to_string(), "[0x0, 0xffffffff]@0x0");
    }

    // --- Child-Slots ---

    #[test]
    fn reads_pairs_in_order() {
        let mut data = Vec::new();
        // Slot 0: Index 1, Tag 1, End 4
        data.extend_from_slice(&[0x01, 0x00, 0x04, 0x00, 0x00, 0x10]);
        // Slot 1: Index 3, Tag 4, End 5
        data.extend_from_slice(&[0x03, 0x00, 0x05, 0x00, 0x00, 0x40]);
        let mut r = ByteReader::new(&data);
        let slots = read_element_descriptors(&mut r, 2).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name_index, 1);
        assert_eq!(slots[0].data.tag, TAG_STRING);
        assert_eq!(slots[1].name_index, 3);
        assert_eq!(slots[1].data.end, 5);
    }

    /// Slots mit Tag -1 werden ausgelassen, die Reihenfolge der
    /// restlichen bleibt erhalten.
    #[test]
    fn absent_slots_are_skipped() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0x00, 0x00, 0x02, 0x00, 0x00, 0x10]);
        data.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x00, 0xF0]); // absent
        data.extend_from_slice(&[0x02, 0x00, 0x03, 0x00, 0x00, 0x20]);
        let mut r = ByteReader::new(&data);
        let slots = read_element_descriptors(&mut r, 3).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name_index, 0);
        assert_eq!(slots[1].name_index, 2);
    }

    #[test]
    fn zero_slots() {
        let mut r = ByteReader::new(&[]);
        assert!(read_element_descriptors(&mut r, 0).unwrap().is_empty());
    }

    #[test]
    fn truncated_pair_is_eof_in_strict_mode() {
        let mut r = ByteReader::new(&[0x01, 0x00, 0x04]);
        assert!(matches!(
            read_element_descriptors(&mut r, 1).unwrap_err(),
            crate::Error::UnexpectedEof { .. }
        ));
    }
}
