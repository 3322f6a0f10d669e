use core::fmt;

/// 48-bit IEEE MAC address.
///
/// The all-zero address is used for an interface whose hardware address has
/// not been assigned yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Identifier([u8; 6]);

impl Identifier {
    pub const UNASSIGNED: Identifier = Identifier([0; 6]);

    pub const fn new(identifier: [u8; 6]) -> Self {
        Identifier(identifier)
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let bytes: [u8; 6] = bytes.try_into().ok()?;
        Some(Identifier(bytes))
    }

    pub const fn as_bytes(&self) -> [u8; 6] {
        self.0
    }

    pub fn is_unassigned(&self) -> bool {
        self.0 == [0; 6]
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x1 != 0
    }

    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x2 != 0
    }

    pub fn is_universally_administered(&self) -> bool {
        !self.is_locally_administered()
    }
}

impl From<[u8; 6]> for Identifier {
    fn from(bytes: [u8; 6]) -> Self {
        Identifier(bytes)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}
