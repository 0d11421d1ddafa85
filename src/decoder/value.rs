//! Typed value decoding, dispatched over the descriptor tag.
//!
//! Jeder Zweig konsumiert seine Wert-Bytes vom Reader und liefert das
//! Descriptor-Ende als neuen laufenden Offset zurueck. Alle Werte landen
//! als Text im Knoten; einzig ein Float-Array aus genau 12 Werten wird
//! als 4x3-Matrix in `row0`..`row3`-Kindknoten rekonstruiert.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::bytestream::latin1_string;
use crate::descriptor::{
    DataDescriptor, TAG_BLOB, TAG_BOOLEAN, TAG_ELEMENT, TAG_FLOATS, TAG_INTEGER, TAG_STRING,
};
use crate::node::Node;
use crate::{Error, Result};

use super::Decoder;

/// Obergrenze fuer den Hex-Dump in Diagnosen.
const DUMP_CAP: usize = 64;

impl Decoder<'_> {
    /// Decodes one value for `node` and returns the new running offset.
    ///
    /// `offset` ist der laufende Offset vor diesem Wert; die Wert-Laenge
    /// ist `descriptor.end - offset`.
    pub(super) fn decode_value(
        &mut self,
        node: &mut Node,
        offset: u32,
        descriptor: &DataDescriptor,
    ) -> Result<u32> {
        if descriptor.tag == TAG_ELEMENT {
            // Selbstbeschreibend ueber den eigenen Count-Header; die
            // Descriptor-Laenge spielt fuer Elemente keine Rolle und
            // wird deshalb gar nicht erst berechnet.
            self.decode_element(node)?;
            return Ok(descriptor.end);
        }

        let length = self.value_length(node.name(), offset, descriptor)?;

        match descriptor.tag {
            TAG_STRING => {
                let text = latin1_string(self.reader.read_bytes(length)?);
                node.set_text(text);
            }
            TAG_INTEGER => {
                let text = self.read_number_value(length)?;
                node.set_text(text);
            }
            TAG_FLOATS => {
                self.read_floats_value(node, length)?;
            }
            TAG_BOOLEAN => {
                let text = self.read_boolean_value(node.name(), length)?;
                node.set_text(text);
            }
            TAG_BLOB => {
                let text = STANDARD.encode(self.reader.read_bytes(length)?);
                node.set_text(text);
            }
            _ => return Err(self.unknown_tag_error(node.name(), descriptor, length)),
        }

        Ok(descriptor.end)
    }

    /// Wert-Laenge aus End-Offset minus laufendem Offset; ein Ende vor
    /// dem laufenden Offset ist ein fataler Formatfehler.
    fn value_length(&self, name: &str, offset: u32, descriptor: &DataDescriptor) -> Result<usize> {
        if descriptor.end < offset {
            return Err(Error::InvalidValueLength {
                name: name.to_owned(),
                offset,
                end: descriptor.end,
            });
        }
        Ok((descriptor.end - offset) as usize)
    }

    /// Integer: 1/2/4 Bytes little-endian signed, dezimal formatiert.
    /// Jede andere Laenge ergibt das Literal "0", ohne Bytes zu
    /// konsumieren (Altbestands-Fallback).
    fn read_number_value(&mut self, length: usize) -> Result<String> {
        Ok(match length {
            1 => self.reader.read_i8()?.to_string(),
            2 => self.reader.read_i16_le()?.to_string(),
            4 => self.reader.read_i32_le()?.to_string(),
            _ => "0".to_string(),
        })
    }

    /// Float-Array: `length/4` Werte, je 6 Nachkommastellen.
    ///
    /// Genau 12 Werte ergeben eine 4x3-Matrix als `row0`..`row3`-Kinder
    /// mit je 3 Werten - und keinen flachen Textwert.
    fn read_floats_value(&mut self, node: &mut Node, length: usize) -> Result<()> {
        let n = length / 4;
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(format!("{:.6}", self.reader.read_f32_le()?));
        }

        if values.len() == 12 {
            for (i, row) in values.chunks(3).enumerate() {
                let mut child = Node::new(format!("row{i}"));
                child.set_text(row.join(" "));
                node.push_child(child);
            }
        } else {
            node.set_text(values.join(" "));
        }
        Ok(())
    }

    /// Boolean: bei Laenge 1 muss das eine Byte exakt 1 sein ("true"),
    /// sonst fataler Fehler. Jede andere Laenge ergibt "false", ohne
    /// ein Byte zu konsumieren.
    fn read_boolean_value(&mut self, name: &str, length: usize) -> Result<&'static str> {
        if length != 1 {
            return Ok("false");
        }
        let value = self.reader.read_i8()?;
        if value != 1 {
            return Err(Error::InvalidBoolean { name: name.to_owned(), value });
        }
        Ok("true")
    }

    /// Diagnose fuer unbekannte Tags: Name, Descriptor-Darstellung und
    /// ein begrenzter Hex-Dump ab der aktuellen Position.
    fn unknown_tag_error(&self, name: &str, descriptor: &DataDescriptor, length: usize) -> Error {
        let bytes = self.reader.peek_bytes(length.min(DUMP_CAP));
        let mut dump = String::from("[ ");
        for b in bytes {
            dump.push_str(&format!("{b:x} "));
        }
        dump.push_str(&format!("]L:{length}"));
        Error::UnknownTypeTag {
            name: name.to_owned(),
            descriptor: descriptor.to_string(),
            dump,
        }
    }
}
