//! Interface label (attribute #10), a CIP `SHORT_STRING`.

use heapless::String;

use crate::error::{Error, Result};

/// Longest label the Ethernet Link object accepts.
pub const MAX_LABEL_LEN: usize = 64;

/// Encoded size of the longest label: length byte plus text.
pub const MAX_ENCODED_LABEL_LEN: usize = 1 + MAX_LABEL_LEN;

/// Bounded, printable-ASCII interface label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceLabel(String<MAX_LABEL_LEN>);

impl InterfaceLabel {
    pub fn new(text: &str) -> Result<Self> {
        if !text.bytes().all(is_label_char) {
            return Err(Error::InvalidAttributeValue);
        }

        let mut label = String::new();
        label
            .push_str(text)
            .map_err(|_| Error::InvalidAttributeValue)?;
        Ok(InterfaceLabel(label))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Write the `SHORT_STRING` form into `out`, returning the bytes used.
    ///
    /// `out` must hold at least `1 + self.len()` bytes.
    pub fn encode(&self, out: &mut [u8]) -> Result<usize> {
        let text = self.0.as_bytes();
        let total = 1 + text.len();
        if out.len() < total {
            return Err(Error::ReplyDataTooLarge);
        }
        out[0] = text.len() as u8;
        out[1..total].copy_from_slice(text);
        Ok(total)
    }

    /// Parse a complete `SHORT_STRING`; trailing bytes are rejected.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let (&len, text) = data.split_first().ok_or(Error::InvalidAttributeValue)?;
        if len as usize != text.len() {
            return Err(Error::InvalidAttributeValue);
        }
        let text = core::str::from_utf8(text).map_err(|_| Error::InvalidAttributeValue)?;
        Self::new(text)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InterfaceLabel {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

fn is_label_char(byte: u8) -> bool {
    byte == b' ' || byte.is_ascii_graphic()
}
