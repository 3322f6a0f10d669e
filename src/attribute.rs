//! Instance attributes of the Ethernet Link object and their wire forms.

use heapless::Vec;

use crate::capability::InterfaceCapability;
use crate::catalog::Catalog;
use crate::encoder;
use crate::error::{Error, Result};
use crate::eui48::Identifier as MacAddress;
use crate::instance::{EthernetLinkInstance, InterfaceFlags};
use crate::label::{InterfaceLabel, MAX_ENCODED_LABEL_LEN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum AttributeId {
    InterfaceSpeed = 1,
    InterfaceFlags = 2,
    PhysicalAddress = 3,
    InterfaceLabel = 10,
    InterfaceCapability = 11,
}

impl AttributeId {
    /// Implemented attributes in ascending id order.
    pub const ALL: [AttributeId; 5] = [
        AttributeId::InterfaceSpeed,
        AttributeId::InterfaceFlags,
        AttributeId::PhysicalAddress,
        AttributeId::InterfaceLabel,
        AttributeId::InterfaceCapability,
    ];

    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            1 => Some(AttributeId::InterfaceSpeed),
            2 => Some(AttributeId::InterfaceFlags),
            3 => Some(AttributeId::PhysicalAddress),
            10 => Some(AttributeId::InterfaceLabel),
            11 => Some(AttributeId::InterfaceCapability),
            _ => None,
        }
    }

    pub fn id(&self) -> u16 {
        *self as u16
    }

    /// The interface capability is fixed by the platform and cannot be
    /// written over the network.
    pub fn is_settable(&self) -> bool {
        !matches!(self, AttributeId::InterfaceCapability)
    }
}

const ALL_ATTRIBUTES_LEN: usize = 4 + 4 + 6 + MAX_ENCODED_LABEL_LEN + encoder::MAX_ENCODED_LEN;

/// Largest response any service of this object produces.
pub const MAX_ATTRIBUTE_DATA_LEN: usize = 128;

const _: () = assert!(ALL_ATTRIBUTES_LEN <= MAX_ATTRIBUTE_DATA_LEN);

/// Encoded attribute bytes returned to the dispatcher.
pub type AttributeData = Vec<u8, MAX_ATTRIBUTE_DATA_LEN>;

/// One attribute's value, detached from the instance it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AttributeValue {
    InterfaceSpeed(u32),
    InterfaceFlags(InterfaceFlags),
    PhysicalAddress(MacAddress),
    InterfaceLabel(InterfaceLabel),
    InterfaceCapability(InterfaceCapability),
}

impl AttributeValue {
    pub(crate) fn read(id: AttributeId, instance: &EthernetLinkInstance) -> Self {
        match id {
            AttributeId::InterfaceSpeed => AttributeValue::InterfaceSpeed(instance.interface_speed),
            AttributeId::InterfaceFlags => AttributeValue::InterfaceFlags(instance.interface_flags),
            AttributeId::PhysicalAddress => {
                AttributeValue::PhysicalAddress(instance.physical_address)
            }
            AttributeId::InterfaceLabel => {
                AttributeValue::InterfaceLabel(instance.interface_label.clone())
            }
            AttributeId::InterfaceCapability => {
                AttributeValue::InterfaceCapability(instance.interface_caps)
            }
        }
    }

    /// Parse write data for `id`. No instance is touched here, so a rejected
    /// write cannot leave partial state behind.
    pub(crate) fn decode(id: AttributeId, data: &[u8]) -> Result<Self> {
        match id {
            AttributeId::InterfaceSpeed => Ok(AttributeValue::InterfaceSpeed(decode_u32(data)?)),
            AttributeId::InterfaceFlags => Ok(AttributeValue::InterfaceFlags(
                InterfaceFlags::from_bits(decode_u32(data)?),
            )),
            AttributeId::PhysicalAddress => MacAddress::from_slice(data)
                .map(AttributeValue::PhysicalAddress)
                .ok_or(Error::InvalidAttributeValue),
            AttributeId::InterfaceLabel => {
                InterfaceLabel::decode(data).map(AttributeValue::InterfaceLabel)
            }
            AttributeId::InterfaceCapability => Err(Error::AttributeNotSettable),
        }
    }

    pub(crate) fn apply(self, instance: &mut EthernetLinkInstance) {
        match self {
            AttributeValue::InterfaceSpeed(speed) => instance.interface_speed = speed,
            AttributeValue::InterfaceFlags(flags) => instance.interface_flags = flags,
            AttributeValue::PhysicalAddress(address) => instance.physical_address = address,
            AttributeValue::InterfaceLabel(label) => instance.interface_label = label,
            AttributeValue::InterfaceCapability(caps) => instance.interface_caps = caps,
        }
    }

    /// Append the wire form to `out`.
    pub(crate) fn encode(&self, catalog: &Catalog, out: &mut AttributeData) -> Result<()> {
        match self {
            AttributeValue::InterfaceSpeed(speed) => put(out, &speed.to_le_bytes()),
            AttributeValue::InterfaceFlags(flags) => put(out, &flags.bits().to_le_bytes()),
            AttributeValue::PhysicalAddress(address) => put(out, &address.as_bytes()),
            AttributeValue::InterfaceLabel(label) => {
                let mut buffer = [0u8; MAX_ENCODED_LABEL_LEN];
                let used = label.encode(&mut buffer)?;
                put(out, &buffer[..used])
            }
            AttributeValue::InterfaceCapability(caps) => {
                put(out, encoder::encode(caps, catalog).as_bytes())
            }
        }
    }
}

fn decode_u32(data: &[u8]) -> Result<u32> {
    let bytes: [u8; 4] = data.try_into().map_err(|_| Error::InvalidAttributeValue)?;
    Ok(u32::from_le_bytes(bytes))
}

fn put(out: &mut AttributeData, bytes: &[u8]) -> Result<()> {
    out.extend_from_slice(bytes)
        .map_err(|_| Error::ReplyDataTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EthernetLinkInstance {
        EthernetLinkInstance {
            interface_speed: 100,
            interface_flags: InterfaceFlags::from_bits(0x0F),
            physical_address: MacAddress::new([0x00, 0x1D, 0x9C, 0xC0, 0xFF, 0xEE]),
            interface_label: InterfaceLabel::new("eth0").unwrap(),
            interface_caps: InterfaceCapability::from_raw(0x02, 0x0C),
        }
    }

    fn encoded(id: AttributeId, instance: &EthernetLinkInstance) -> AttributeData {
        let mut out = AttributeData::new();
        AttributeValue::read(id, instance)
            .encode(&Catalog::STANDARD, &mut out)
            .unwrap();
        out
    }

    #[test]
    fn id_mapping() {
        for id in AttributeId::ALL {
            assert_eq!(AttributeId::from_id(id.id()), Some(id));
        }
        for unsupported in [0u16, 4, 5, 6, 7, 8, 9, 12, 0xFFFF] {
            assert_eq!(AttributeId::from_id(unsupported), None);
        }
    }

    #[test]
    fn fixed_attribute_encodings() {
        let instance = sample();
        assert_eq!(&encoded(AttributeId::InterfaceSpeed, &instance)[..], &[100, 0, 0, 0]);
        assert_eq!(&encoded(AttributeId::InterfaceFlags, &instance)[..], &[0x0F, 0, 0, 0]);
        assert_eq!(
            &encoded(AttributeId::PhysicalAddress, &instance)[..],
            &[0x00, 0x1D, 0x9C, 0xC0, 0xFF, 0xEE]
        );
        assert_eq!(&encoded(AttributeId::InterfaceLabel, &instance)[..], b"\x04eth0");
    }

    #[test]
    fn capability_goes_through_encoder() {
        let instance = sample();
        assert_eq!(
            &encoded(AttributeId::InterfaceCapability, &instance)[..],
            &[0x02, 0, 0, 0, 0x02, 0x00, 15, 0, 16, 0]
        );
    }

    #[test]
    fn decode_enforces_exact_sizes() {
        assert_eq!(
            AttributeValue::decode(AttributeId::InterfaceSpeed, &[1, 0, 0]),
            Err(Error::InvalidAttributeValue)
        );
        assert_eq!(
            AttributeValue::decode(AttributeId::InterfaceFlags, &[1, 0, 0, 0, 0]),
            Err(Error::InvalidAttributeValue)
        );
        assert_eq!(
            AttributeValue::decode(AttributeId::PhysicalAddress, &[1, 2, 3, 4, 5]),
            Err(Error::InvalidAttributeValue)
        );
        assert_eq!(
            AttributeValue::decode(AttributeId::InterfaceSpeed, &[0xE8, 0x03, 0, 0]),
            Ok(AttributeValue::InterfaceSpeed(1000))
        );
    }

    #[test]
    fn capability_is_never_decoded() {
        for payload in [&[][..], &[0x0B, 0, 0, 0, 0, 0][..]] {
            assert_eq!(
                AttributeValue::decode(AttributeId::InterfaceCapability, payload),
                Err(Error::AttributeNotSettable)
            );
        }
        assert!(!AttributeId::InterfaceCapability.is_settable());
        assert!(AttributeId::PhysicalAddress.is_settable());
    }

    #[test]
    fn apply_touches_only_its_field() {
        let mut instance = sample();
        AttributeValue::InterfaceSpeed(10).apply(&mut instance);

        let mut expected = sample();
        expected.interface_speed = 10;
        assert_eq!(instance, expected);
    }
}
