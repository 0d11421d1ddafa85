//! Interned name dictionary of a packed section.
//!
//! Direkt nach dem Header folgt eine Folge NUL-terminierter Namen, ohne
//! Zaehlfeld: die Tabelle endet beim ersten leeren Namen (einzelnes
//! NUL-Byte). Alle Element-Namen im Stream referenzieren diese Tabelle
//! ueber 0-basierte Indizes; die Tabelle selbst ist nach dem Aufbau
//! unveraenderlich.

use crate::bytestream::ByteReader;
use crate::{Error, Result};

/// Upper bound on a single dictionary name, in bytes.
pub const MAX_NAME_LENGTH: usize = 256;

/// Ordered, index-addressed name table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    names: Vec<String>,
}

impl Dictionary {
    /// Reads the dictionary from the current reader position.
    ///
    /// Liest Namen bis zum leeren Sentinel-Namen; der Sentinel wird
    /// konsumiert und verworfen, der Reader steht danach direkt auf dem
    /// Wurzel-Element.
    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self> {
        let mut names = Vec::new();
        loop {
            let name = reader.read_cstring(MAX_NAME_LENGTH)?;
            if name.is_empty() {
                break;
            }
            names.push(name);
        }
        Ok(Self { names })
    }

    /// Builds a dictionary from pre-existing names (tests, tools).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Resolves a name index.
    ///
    /// Out-of-Range ist fatal - auch der Index -1, den der
    /// Permissive-Modus bei Under-Reads produziert.
    pub fn get(&self, index: i32) -> Result<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
            .ok_or(Error::NameIndexOutOfRange { index, len: self.names.len() })
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the dictionary holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates the names in interning order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Sentinel-Terminierung ---

    /// "alpha\0beta\0\0" ergibt genau ["alpha", "beta"]; der Reader
    /// steht nach dem terminierenden NUL.
    #[test]
    fn reads_until_empty_sentinel() {
        let data = b"alpha\0beta\0\0rest";
        let mut r = ByteReader::new(data);
        let dict = Dictionary::read(&mut r).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get(0).unwrap(), "alpha");
        assert_eq!(dict.get(1).unwrap(), "beta");
        // Position direkt hinter dem Sentinel
        assert_eq!(r.position(), 12);
    }

    #[test]
    fn empty_dictionary() {
        let mut r = ByteReader::new(&[0x00, 0xFF]);
        let dict = Dictionary::read(&mut r).unwrap();
        assert!(dict.is_empty());
        assert_eq!(r.position(), 1);
    }

    #[test]
    fn truncated_dictionary_is_eof() {
        // Stream endet mitten in einem Namen
        let mut r = ByteReader::new(b"alpha");
        assert!(matches!(
            Dictionary::read(&mut r).unwrap_err(),
            Error::UnexpectedEof { .. }
        ));
    }

    #[test]
    fn oversized_name_is_rejected() {
        let mut data = vec![b'x'; MAX_NAME_LENGTH + 1];
        data.push(0);
        data.push(0);
        let mut r = ByteReader::new(&data);
        assert_eq!(
            Dictionary::read(&mut r).unwrap_err(),
            Error::NameTooLong { offset: 0 }
        );
    }

    // --- Index-Aufloesung ---

    #[test]
    fn get_out_of_range() {
        let dict = Dictionary::from_names(["a", "b"]);
        assert_eq!(
            dict.get(2).unwrap_err(),
            Error::NameIndexOutOfRange { index: 2, len: 2 }
        );
    }

    /// Der Permissive-Sentinel -1 als Name-Index muss hart scheitern.
    #[test]
    fn get_negative_index() {
        let dict = Dictionary::from_names(["a"]);
        assert_eq!(
            dict.get(-1).unwrap_err(),
            Error::NameIndexOutOfRange { index: -1, len: 1 }
        );
    }

    #[test]
    fn iter_preserves_order() {
        let dict = Dictionary::from_names(["hull", "turret", "gun"]);
        let names: Vec<_> = dict.iter().collect();
        assert_eq!(names, vec!["hull", "turret", "gun"]);
    }
}
