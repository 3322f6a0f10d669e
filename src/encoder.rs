//! Interface Capability encoder
//!
//! Builds the wire form of attribute #11 from an [`InterfaceCapability`]:
//!
//! ```text
//! +-----------------+---------+---------+-----+-------------+
//! | capability bits |  count  | entry 0 | ... | entry n - 1 |
//! |   u32 (LE)      | u16(LE) | u16(LE) |     |   u16(LE)   |
//! +-----------------+---------+---------+-----+-------------+
//! ```
//!
//! Entries are emitted in ascending catalog bit order. Selector bits without a
//! catalog row are skipped and do not count.

use crate::capability::{InterfaceCapability, SpeedDuplexSelector};
use crate::catalog::{Catalog, SpeedDuplexEntry};

pub const CAPABILITY_BITS_SIZE: usize = 4;
pub const ENTRY_COUNT_SIZE: usize = 2;
pub const WIRE_CODE_SIZE: usize = 2;

/// Largest possible encoding: every one of the 16 selector bits defined and set.
pub const MAX_ENCODED_LEN: usize = CAPABILITY_BITS_SIZE + ENTRY_COUNT_SIZE + 16 * WIRE_CODE_SIZE;

/// Encoded attribute #11.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedCapability {
    buffer: [u8; MAX_ENCODED_LEN],
    len: usize,
}

impl EncodedCapability {
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: even an empty selector encodes the flags word and count.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn put(&mut self, bytes: &[u8]) {
        self.buffer[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
    }
}

/// Catalog rows selected by `selector`, in ascending bit order.
pub fn supported_entries(
    selector: SpeedDuplexSelector,
    catalog: &Catalog,
) -> impl Iterator<Item = &'static SpeedDuplexEntry> {
    catalog
        .ordered_entries()
        .iter()
        .filter(move |entry| selector.is_set(entry.bit_position))
        .take(16)
}

/// Number of bytes [`encode`] will produce for `capability`.
pub fn encoded_len(capability: &InterfaceCapability, catalog: &Catalog) -> usize {
    let count = supported_entries(capability.speed_duplex_selector, catalog).count();
    CAPABILITY_BITS_SIZE + ENTRY_COUNT_SIZE + count * WIRE_CODE_SIZE
}

/// Encode attribute #11.
///
/// Pure function of its inputs; never fails.
///
/// Entries come out in ascending bit order only when `catalog` passes
/// [`Catalog::is_well_formed`]; otherwise they follow table order. The
/// standard catalog and any catalog accepted by the builder are well formed.
pub fn encode(capability: &InterfaceCapability, catalog: &Catalog) -> EncodedCapability {
    let mut encoded = EncodedCapability {
        buffer: [0; MAX_ENCODED_LEN],
        len: 0,
    };

    encoded.put(&capability.capability_bits.bits().to_le_bytes());

    let count = supported_entries(capability.speed_duplex_selector, catalog).count() as u16;
    encoded.put(&count.to_le_bytes());

    for entry in supported_entries(capability.speed_duplex_selector, catalog) {
        encoded.put(&entry.wire_code.to_le_bytes());
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityBits;
    use crate::catalog::{BitNumber, Duplex};

    fn entry_codes(bytes: &[u8]) -> impl Iterator<Item = u16> + '_ {
        bytes[6..]
            .chunks(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
    }

    #[test]
    fn empty_selector_encodes_zero_entries() {
        for bits in [0u32, 0x0B, 0xFFFF_FFFF] {
            let caps = InterfaceCapability::from_raw(bits, 0);
            let encoded = encode(&caps, &Catalog::STANDARD);
            assert_eq!(encoded.len(), 6);
            assert_eq!(&encoded.as_bytes()[4..6], &[0, 0]);
            assert_eq!(&encoded.as_bytes()[..4], &bits.to_le_bytes());
            assert!(!encoded.is_empty());
        }
    }

    #[test]
    fn manual_reset_autoneg_manual_speed_with_10hd_100hd() {
        let caps = InterfaceCapability::new(
            CapabilityBits::MANUAL_RESET
                | CapabilityBits::AUTO_NEGOTIATION
                | CapabilityBits::MANUAL_SPEED,
            SpeedDuplexSelector::from_bits(0x05),
        );
        let encoded = encode(&caps, &Catalog::STANDARD);
        assert_eq!(
            encoded.as_bytes(),
            &[0x0B, 0x00, 0x00, 0x00, 0x02, 0x00, 0x0A, 0x00, 0x0F, 0x00]
        );
    }

    #[test]
    fn all_modes_in_ascending_bit_order() {
        let caps = InterfaceCapability::from_raw(0, 0x003F);
        let encoded = encode(&caps, &Catalog::STANDARD);
        assert_eq!(encoded.len(), 6 + 6 * 2);
        assert_eq!(&encoded.as_bytes()[4..6], &[6, 0]);

        let mut codes = entry_codes(encoded.as_bytes());
        for expected in [10u16, 11, 15, 16, 29, 30] {
            assert_eq!(codes.next(), Some(expected));
        }
        assert_eq!(codes.next(), None);
    }

    #[test]
    fn order_follows_bit_position_for_every_selector() {
        for selector in 0..=u16::MAX {
            let caps = InterfaceCapability::from_raw(0, selector);
            let encoded = encode(&caps, &Catalog::STANDARD);
            let bytes = encoded.as_bytes();

            let count = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;
            assert_eq!(count, (selector & 0x3F).count_ones() as usize);
            assert_eq!(bytes.len(), 6 + 2 * count);

            let expected = Catalog::STANDARD
                .ordered_entries()
                .iter()
                .filter(|e| selector & e.mask() != 0)
                .map(|e| e.wire_code);
            assert!(entry_codes(bytes).eq(expected));
        }
    }

    #[test]
    fn undefined_bits_are_inert() {
        let catalog = Catalog::STANDARD;
        for defined in 0..=0x3Fu16 {
            let plain = encode(&InterfaceCapability::from_raw(0x02, defined), &catalog);
            for undefined in [0x0040u16, 0x0100, 0x8000, 0xFFC0] {
                let noisy = encode(
                    &InterfaceCapability::from_raw(0x02, defined | undefined),
                    &catalog,
                );
                assert_eq!(plain, noisy);
            }
        }
    }

    #[test]
    fn encoded_len_matches_encoding() {
        let caps = InterfaceCapability::from_raw(0x0F, 0x8029);
        let catalog = Catalog::STANDARD;
        assert_eq!(encoded_len(&caps, &catalog), encode(&caps, &catalog).len());
        assert_eq!(encoded_len(&caps, &catalog), 6 + 3 * 2);
    }

    #[test]
    fn extended_catalog_keeps_existing_codes() {
        static EXTENDED: [SpeedDuplexEntry; 3] = [
            SpeedDuplexEntry::new(BitNumber::Speed10MbpsHalfDuplex, 10, Duplex::Half, 10),
            SpeedDuplexEntry::new(BitNumber::Speed100MbpsHalfDuplex, 100, Duplex::Half, 15),
            SpeedDuplexEntry {
                bit_position: 9,
                speed: 2500,
                duplex: Duplex::Full,
                wire_code: 0x80,
            },
        ];
        let catalog = Catalog::new(&EXTENDED);
        assert!(catalog.is_well_formed());

        let caps = InterfaceCapability::from_raw(0, 0x0205);
        let encoded = encode(&caps, &catalog);
        assert_eq!(
            encoded.as_bytes(),
            &[0, 0, 0, 0, 0x03, 0x00, 0x0A, 0x00, 0x0F, 0x00, 0x80, 0x00]
        );
    }

    #[test]
    fn supported_entries_yields_catalog_rows() {
        let selector = SpeedDuplexSelector::SPEED_100MBPS_FULL_DUPLEX
            | SpeedDuplexSelector::SPEED_1000MBPS_FULL_DUPLEX;
        let mut entries = supported_entries(selector, &Catalog::STANDARD);
        assert_eq!(entries.next().map(|e| e.speed), Some(100));
        assert_eq!(entries.next().map(|e| e.speed), Some(1000));
        assert!(entries.next().is_none());
    }
}
