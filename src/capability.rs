//! Interface Capability bitmap model
//!
//! [`InterfaceCapability`] is not a direct representation of attribute #11.
//! It stores the speed / duplex list as a selector bitmap over the
//! [`Catalog`](crate::catalog::Catalog) and leaves building the actual list to
//! the encoder.

use core::ops::BitOr;
use paste::paste;

use crate::catalog::BitNumber;

/// Capability flags word of attribute #11.
///
/// Bits not named here are kept as given and sent back verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapabilityBits(u32);

impl CapabilityBits {
    /// Interface needs a reset to activate Interface Control changes.
    pub const MANUAL_RESET: Self = Self(0x01);
    /// Interface supports link auto-negotiation.
    pub const AUTO_NEGOTIATION: Self = Self(0x02);
    /// Interface supports link auto-crossover.
    pub const AUTO_MDIX: Self = Self(0x04);
    /// Interface supports manual speed / duplex setting.
    pub const MANUAL_SPEED: Self = Self(0x08);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for CapabilityBits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Bitmap selecting rows of the speed / duplex catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedDuplexSelector(u16);

impl SpeedDuplexSelector {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn is_set(&self, bit_position: u8) -> bool {
        bit_position < 16 && self.0 & (1 << bit_position) != 0
    }

    pub const fn with_bit(self, bit: BitNumber) -> Self {
        Self(self.0 | (1 << bit as u16))
    }
}

impl BitOr for SpeedDuplexSelector {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

macro_rules! define_speed_duplex_bits {
    ($($name:ident => $bit:ident,)+) => {
        paste! {
            impl SpeedDuplexSelector {
                $(
                    pub const [<$name:upper>]: Self = Self(1 << BitNumber::$bit as u16);

                    pub const fn [<set_ $name _supported>](self) -> Self {
                        self.with_bit(BitNumber::$bit)
                    }

                    pub const fn [<supports_ $name>](&self) -> bool {
                        self.is_set(BitNumber::$bit as u8)
                    }
                )+
            }
        }
    };
}

define_speed_duplex_bits! {
    speed_10mbps_half_duplex => Speed10MbpsHalfDuplex,
    speed_10mbps_full_duplex => Speed10MbpsFullDuplex,
    speed_100mbps_half_duplex => Speed100MbpsHalfDuplex,
    speed_100mbps_full_duplex => Speed100MbpsFullDuplex,
    speed_1000mbps_half_duplex => Speed1000MbpsHalfDuplex,
    speed_1000mbps_full_duplex => Speed1000MbpsFullDuplex,
}

/// Compact form of the Interface Capability attribute (#11).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterfaceCapability {
    pub capability_bits: CapabilityBits,
    pub speed_duplex_selector: SpeedDuplexSelector,
}

impl InterfaceCapability {
    pub const fn new(
        capability_bits: CapabilityBits,
        speed_duplex_selector: SpeedDuplexSelector,
    ) -> Self {
        InterfaceCapability {
            capability_bits,
            speed_duplex_selector,
        }
    }

    pub const fn from_raw(capability_bits: u32, speed_duplex_selector: u16) -> Self {
        Self::new(
            CapabilityBits::from_bits(capability_bits),
            SpeedDuplexSelector::from_bits(speed_duplex_selector),
        )
    }
}
