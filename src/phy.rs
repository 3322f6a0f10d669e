//! Clause 22 PHY status registers
//!
//! Derives the static [`InterfaceCapability`] of an interface from what its
//! PHY reports, so the platform does not have to restate it by hand.

use crate::capability::{CapabilityBits, InterfaceCapability, SpeedDuplexSelector};

pub enum Register {
    Bmcr = 0x00,
    Bmsr = 0x01,
    ExtendedStatus = 0x0F,
}

/// Management interface to a PHY.
pub trait Mdio {
    fn read_register(&self, register: Register) -> u16;
}

enum BmsrBitNumbers {
    ExtendedCapability = 0,
    LinkDetected = 2,
    AutoNegotiationCapable = 3,
    AutoNegotiationComplete = 5,
    ExtendedStatus = 8,
    HalfDuplex10BaseTCapable = 11,
    FullDuplex10BaseTCapable = 12,
    HalfDuplex100BaseTXCapable = 13,
    FullDuplex100BaseTXCapable = 14,
}

/// Basic Mode Status Register
#[derive(Clone, Copy)]
pub struct Bmsr(u16);
impl Bmsr {
    pub fn new(initial_value: u16) -> Self {
        Bmsr(initial_value)
    }

    fn bit(&self, bit: BmsrBitNumbers) -> bool {
        self.0 & (1 << bit as u32) != 0
    }

    pub fn has_extended_capability(&self) -> bool {
        self.bit(BmsrBitNumbers::ExtendedCapability)
    }

    pub fn link_detected(&self) -> bool {
        self.bit(BmsrBitNumbers::LinkDetected)
    }

    pub fn auto_negotiation_capable(&self) -> bool {
        self.bit(BmsrBitNumbers::AutoNegotiationCapable)
    }

    pub fn auto_negotiation_complete(&self) -> bool {
        self.bit(BmsrBitNumbers::AutoNegotiationComplete)
    }

    pub fn has_extended_status(&self) -> bool {
        self.bit(BmsrBitNumbers::ExtendedStatus)
    }

    pub fn half_duplex_10base_t_capable(&self) -> bool {
        self.bit(BmsrBitNumbers::HalfDuplex10BaseTCapable)
    }

    pub fn full_duplex_10base_t_capable(&self) -> bool {
        self.bit(BmsrBitNumbers::FullDuplex10BaseTCapable)
    }

    pub fn half_duplex_100base_tx_capable(&self) -> bool {
        self.bit(BmsrBitNumbers::HalfDuplex100BaseTXCapable)
    }

    pub fn full_duplex_100base_tx_capable(&self) -> bool {
        self.bit(BmsrBitNumbers::FullDuplex100BaseTXCapable)
    }
}

/// Extended Status Register, only meaningful when BMSR bit 8 is set.
#[derive(Clone, Copy)]
pub struct ExtendedStatus(u16);
impl ExtendedStatus {
    pub fn new(initial_value: u16) -> Self {
        ExtendedStatus(initial_value)
    }

    pub fn half_duplex_1000base_t_capable(&self) -> bool {
        self.0 & (1 << 12) != 0
    }

    pub fn full_duplex_1000base_t_capable(&self) -> bool {
        self.0 & (1 << 13) != 0
    }
}

/// Capability advertised by a PHY's status registers.
pub fn interface_capability(bmsr: Bmsr, estat: Option<ExtendedStatus>) -> InterfaceCapability {
    let mut capability_bits = CapabilityBits::empty();
    if bmsr.auto_negotiation_capable() {
        capability_bits.insert(CapabilityBits::AUTO_NEGOTIATION);
    }

    let mut selector = SpeedDuplexSelector::empty();
    if bmsr.half_duplex_10base_t_capable() {
        selector = selector.set_speed_10mbps_half_duplex_supported();
    }
    if bmsr.full_duplex_10base_t_capable() {
        selector = selector.set_speed_10mbps_full_duplex_supported();
    }
    if bmsr.half_duplex_100base_tx_capable() {
        selector = selector.set_speed_100mbps_half_duplex_supported();
    }
    if bmsr.full_duplex_100base_tx_capable() {
        selector = selector.set_speed_100mbps_full_duplex_supported();
    }

    if let Some(estat) = estat.filter(|_| bmsr.has_extended_status()) {
        if estat.half_duplex_1000base_t_capable() {
            selector = selector.set_speed_1000mbps_half_duplex_supported();
        }
        if estat.full_duplex_1000base_t_capable() {
            selector = selector.set_speed_1000mbps_full_duplex_supported();
        }
    }

    InterfaceCapability::new(capability_bits, selector)
}

/// Read BMSR (and extended status when present) and derive the capability.
pub fn read_interface_capability<M: Mdio>(phy: &M) -> InterfaceCapability {
    let bmsr = Bmsr::new(phy.read_register(Register::Bmsr));
    let estat = if bmsr.has_extended_status() {
        Some(ExtendedStatus::new(phy.read_register(Register::ExtendedStatus)))
    } else {
        None
    };
    interface_capability(bmsr, estat)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePhy {
        bmsr: u16,
        estat: u16,
    }

    impl Mdio for FakePhy {
        fn read_register(&self, register: Register) -> u16 {
            match register {
                Register::Bmcr => 0x1000,
                Register::Bmsr => self.bmsr,
                Register::ExtendedStatus => self.estat,
            }
        }
    }

    #[test]
    fn fast_ethernet_phy_with_autoneg() {
        // KSZ8081-style BMSR: 10/100 HD/FD, auto-negotiation able, extended capability.
        let caps = interface_capability(Bmsr::new(0x7809), None);
        assert_eq!(caps.capability_bits, CapabilityBits::AUTO_NEGOTIATION);
        assert_eq!(caps.speed_duplex_selector.bits(), 0x0F);
    }

    #[test]
    fn gigabit_modes_require_extended_status_bit() {
        let estat = ExtendedStatus::new(0x3000);

        let without = interface_capability(Bmsr::new(0x7809), Some(estat));
        assert_eq!(without.speed_duplex_selector.bits(), 0x0F);

        let with = interface_capability(Bmsr::new(0x7909), Some(estat));
        assert_eq!(with.speed_duplex_selector.bits(), 0x3F);
    }

    #[test]
    fn reads_through_mdio() {
        let phy = FakePhy {
            bmsr: 0x7909,
            estat: 0x2000,
        };
        let caps = read_interface_capability(&phy);
        assert!(caps.speed_duplex_selector.supports_speed_1000mbps_full_duplex());
        assert!(!caps.speed_duplex_selector.supports_speed_1000mbps_half_duplex());
    }

    #[test]
    fn status_readers() {
        let bmsr = Bmsr::new(0x782D);
        assert!(bmsr.link_detected());
        assert!(bmsr.auto_negotiation_complete());
        assert!(bmsr.has_extended_capability());
    }
}
