use crate::capability::InterfaceCapability;
use crate::eui48::Identifier as MacAddress;
use crate::label::InterfaceLabel;

/// Auto-negotiation state carried in bits 2..4 of the interface flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NegotiationStatus {
    InProgress = 0,
    SpeedDuplexDefaulted = 1,
    DuplexDefaulted = 2,
    Negotiated = 3,
    NotAttempted = 4,
}

enum FlagBitNumbers {
    LinkActive = 0,
    FullDuplex = 1,
    ManualResetRequired = 5,
    LocalHardwareFault = 6,
}

const NEGOTIATION_STATUS_SHIFT: u32 = 2;
const NEGOTIATION_STATUS_MASK: u32 = 0x7 << NEGOTIATION_STATUS_SHIFT;

/// Interface Flags (attribute #2).
///
/// The object stores and returns the word as-is; the accessors below only
/// interpret the standard layout for platform code that maintains it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterfaceFlags(u32);

impl InterfaceFlags {
    pub const fn from_bits(bits: u32) -> Self {
        InterfaceFlags(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    fn bit(&self, bit: FlagBitNumbers) -> bool {
        self.0 & (1 << bit as u32) != 0
    }

    fn with_bit(self, bit: FlagBitNumbers, set: bool) -> Self {
        let mask = 1 << bit as u32;
        if set {
            InterfaceFlags(self.0 | mask)
        } else {
            InterfaceFlags(self.0 & !mask)
        }
    }

    pub fn link_active(&self) -> bool {
        self.bit(FlagBitNumbers::LinkActive)
    }

    pub fn set_link_active(self, active: bool) -> Self {
        self.with_bit(FlagBitNumbers::LinkActive, active)
    }

    pub fn full_duplex(&self) -> bool {
        self.bit(FlagBitNumbers::FullDuplex)
    }

    pub fn set_full_duplex(self, full: bool) -> Self {
        self.with_bit(FlagBitNumbers::FullDuplex, full)
    }

    pub fn manual_reset_required(&self) -> bool {
        self.bit(FlagBitNumbers::ManualResetRequired)
    }

    pub fn set_manual_reset_required(self, required: bool) -> Self {
        self.with_bit(FlagBitNumbers::ManualResetRequired, required)
    }

    pub fn local_hardware_fault(&self) -> bool {
        self.bit(FlagBitNumbers::LocalHardwareFault)
    }

    pub fn set_local_hardware_fault(self, fault: bool) -> Self {
        self.with_bit(FlagBitNumbers::LocalHardwareFault, fault)
    }

    /// `None` for the reserved values 5..7.
    pub fn negotiation_status(&self) -> Option<NegotiationStatus> {
        match (self.0 & NEGOTIATION_STATUS_MASK) >> NEGOTIATION_STATUS_SHIFT {
            0 => Some(NegotiationStatus::InProgress),
            1 => Some(NegotiationStatus::SpeedDuplexDefaulted),
            2 => Some(NegotiationStatus::DuplexDefaulted),
            3 => Some(NegotiationStatus::Negotiated),
            4 => Some(NegotiationStatus::NotAttempted),
            _ => None,
        }
    }

    pub fn set_negotiation_status(self, status: NegotiationStatus) -> Self {
        InterfaceFlags(
            (self.0 & !NEGOTIATION_STATUS_MASK)
                | ((status as u32) << NEGOTIATION_STATUS_SHIFT),
        )
    }
}

/// State of one Ethernet Link object instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EthernetLinkInstance {
    /// Attribute #1, Mbit/s, 0 when unknown or down.
    pub interface_speed: u32,
    /// Attribute #2.
    pub interface_flags: InterfaceFlags,
    /// Attribute #3.
    pub physical_address: MacAddress,
    /// Attribute #10.
    pub interface_label: InterfaceLabel,
    /// Attribute #11, in compact form.
    pub interface_caps: InterfaceCapability,
}
