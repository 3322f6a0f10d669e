//! Speed / duplex catalog
//!
//! Fixed table that ties each bit of the speed / duplex selector to a concrete
//! link mode and the code transmitted for it in the Interface Capability
//! attribute. Once a bit position is assigned its wire code never changes;
//! new link modes are added by appending rows with higher bit positions.

/// Bit positions of the speed / duplex selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BitNumber {
    Speed10MbpsHalfDuplex = 0,
    Speed10MbpsFullDuplex = 1,
    Speed100MbpsHalfDuplex = 2,
    Speed100MbpsFullDuplex = 3,
    Speed1000MbpsHalfDuplex = 4,
    Speed1000MbpsFullDuplex = 5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    Half,
    Full,
}

/// One catalog row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedDuplexEntry {
    /// Selector bit this row answers to.
    pub bit_position: u8,
    /// Link speed in Mbit/s.
    pub speed: u16,
    pub duplex: Duplex,
    /// IANA MAU type number sent on the wire.
    pub wire_code: u16,
}

impl SpeedDuplexEntry {
    pub const fn new(bit: BitNumber, speed: u16, duplex: Duplex, wire_code: u16) -> Self {
        SpeedDuplexEntry {
            bit_position: bit as u8,
            speed,
            duplex,
            wire_code,
        }
    }

    /// Selector mask with only this row's bit set, 0 for rows beyond bit 15.
    pub const fn mask(&self) -> u16 {
        match 1u16.checked_shl(self.bit_position as u32) {
            Some(mask) => mask,
            None => 0,
        }
    }
}

// 10BASE-T, 100BASE-TX and 1000BASE-T MAU types (RFC 4836).
const SPEED_DUPLEX_TABLE: [SpeedDuplexEntry; 6] = [
    SpeedDuplexEntry::new(BitNumber::Speed10MbpsHalfDuplex, 10, Duplex::Half, 10),
    SpeedDuplexEntry::new(BitNumber::Speed10MbpsFullDuplex, 10, Duplex::Full, 11),
    SpeedDuplexEntry::new(BitNumber::Speed100MbpsHalfDuplex, 100, Duplex::Half, 15),
    SpeedDuplexEntry::new(BitNumber::Speed100MbpsFullDuplex, 100, Duplex::Full, 16),
    SpeedDuplexEntry::new(BitNumber::Speed1000MbpsHalfDuplex, 1000, Duplex::Half, 29),
    SpeedDuplexEntry::new(BitNumber::Speed1000MbpsFullDuplex, 1000, Duplex::Full, 30),
];

/// Read-only view over a speed / duplex table.
///
/// The table must be sorted by ascending, unique bit positions below 16. The
/// standard catalog satisfies this; [`Catalog::is_well_formed`] checks it for
/// any other table.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [SpeedDuplexEntry],
}

impl Catalog {
    /// The six 10/100/1000 Mbit half/full duplex link modes.
    pub const STANDARD: Catalog = Catalog {
        entries: &SPEED_DUPLEX_TABLE,
    };

    pub const fn new(entries: &'static [SpeedDuplexEntry]) -> Self {
        Catalog { entries }
    }

    /// Wire code for a selector bit, if the bit is defined.
    pub fn lookup(&self, bit_position: u8) -> Option<u16> {
        self.entries
            .iter()
            .find(|entry| entry.bit_position == bit_position)
            .map(|entry| entry.wire_code)
    }

    /// All rows in ascending bit order.
    pub fn ordered_entries(&self) -> &'static [SpeedDuplexEntry] {
        self.entries
    }

    /// Selector bits that have a catalog row.
    pub fn defined_mask(&self) -> u16 {
        self.entries.iter().fold(0, |mask, entry| mask | entry.mask())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_well_formed(&self) -> bool {
        let mut previous: Option<u8> = None;
        for entry in self.entries {
            if entry.bit_position >= 16 {
                return false;
            }
            if let Some(p) = previous {
                if entry.bit_position <= p {
                    return false;
                }
            }
            previous = Some(entry.bit_position);
        }
        true
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_well_formed() {
        assert!(Catalog::STANDARD.is_well_formed());
        assert_eq!(Catalog::STANDARD.len(), 6);
        assert_eq!(Catalog::STANDARD.defined_mask(), 0x003F);
    }

    #[test]
    fn lookup_returns_mau_types() {
        let catalog = Catalog::STANDARD;
        assert_eq!(catalog.lookup(0), Some(10));
        assert_eq!(catalog.lookup(1), Some(11));
        assert_eq!(catalog.lookup(2), Some(15));
        assert_eq!(catalog.lookup(3), Some(16));
        assert_eq!(catalog.lookup(4), Some(29));
        assert_eq!(catalog.lookup(5), Some(30));
        assert_eq!(catalog.lookup(6), None);
        assert_eq!(catalog.lookup(15), None);
    }

    #[test]
    fn entries_carry_speed_and_duplex() {
        let entries = Catalog::STANDARD.ordered_entries();
        assert_eq!(entries[3].speed, 100);
        assert_eq!(entries[3].duplex, Duplex::Full);
        assert_eq!(entries[4].speed, 1000);
        assert_eq!(entries[4].duplex, Duplex::Half);
    }

    #[test]
    fn unsorted_table_is_rejected() {
        static UNSORTED: [SpeedDuplexEntry; 2] = [
            SpeedDuplexEntry::new(BitNumber::Speed100MbpsHalfDuplex, 100, Duplex::Half, 15),
            SpeedDuplexEntry::new(BitNumber::Speed10MbpsHalfDuplex, 10, Duplex::Half, 10),
        ];
        assert!(!Catalog::new(&UNSORTED).is_well_formed());
    }

    #[test]
    fn rows_beyond_selector_width_have_no_mask() {
        static WIDE: [SpeedDuplexEntry; 2] = [
            SpeedDuplexEntry::new(BitNumber::Speed10MbpsHalfDuplex, 10, Duplex::Half, 10),
            SpeedDuplexEntry {
                bit_position: 16,
                speed: 10000,
                duplex: Duplex::Full,
                wire_code: 0x90,
            },
        ];
        let catalog = Catalog::new(&WIDE);
        assert!(!catalog.is_well_formed());
        assert_eq!(WIDE[1].mask(), 0);
        assert_eq!(catalog.defined_mask(), 0x0001);
    }
}
