use heapless::Vec;

use crate::capability::{CapabilityBits, InterfaceCapability};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::instance::InterfaceFlags;
use crate::object::Bootstrap;
use crate::phy::{self, Mdio};
use crate::store::InstanceStore;

/// Start-up description of one physical interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterfaceConfig<'a> {
    label: &'a str,
    interface_speed: u32,
    interface_flags: InterfaceFlags,
    capability: InterfaceCapability,
}

impl<'a> InterfaceConfig<'a> {
    pub fn new() -> Self {
        InterfaceConfig {
            label: "",
            interface_speed: 0,
            interface_flags: InterfaceFlags::default(),
            capability: InterfaceCapability::default(),
        }
    }

    pub fn set_label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn set_interface_speed(mut self, mbps: u32) -> Self {
        self.interface_speed = mbps;
        self
    }

    pub fn interface_speed(&self) -> u32 {
        self.interface_speed
    }

    pub fn set_interface_flags(mut self, flags: InterfaceFlags) -> Self {
        self.interface_flags = flags;
        self
    }

    pub fn interface_flags(&self) -> InterfaceFlags {
        self.interface_flags
    }

    pub fn set_capability(mut self, capability: InterfaceCapability) -> Self {
        self.capability = capability;
        self
    }

    /// Take the speed / duplex modes and auto-negotiation support from the
    /// PHY. Capability bits already set are kept.
    pub fn set_capability_from_phy<M: Mdio>(mut self, phy: &M) -> Self {
        let detected = phy::read_interface_capability(phy);
        self.capability.capability_bits.insert(detected.capability_bits);
        self.capability.speed_duplex_selector = detected.speed_duplex_selector;
        self
    }

    /// Add capability flags the PHY registers cannot report, e.g. auto-MDIX.
    pub fn add_capability_bits(mut self, bits: CapabilityBits) -> Self {
        self.capability.capability_bits.insert(bits);
        self
    }

    pub fn capability(&self) -> InterfaceCapability {
        self.capability
    }
}

/// Collects the platform's interfaces and produces the initialized object.
///
/// `N` is the number of Ethernet Link instances, fixed by the hardware.
pub struct Builder<'a, const N: usize> {
    interfaces: Vec<InterfaceConfig<'a>, N>,
    too_many_interfaces: bool,
    catalog: Catalog,
}

impl<'a, const N: usize> Builder<'a, N> {
    pub fn new() -> Self {
        Builder {
            interfaces: Vec::new(),
            too_many_interfaces: false,
            catalog: Catalog::STANDARD,
        }
    }

    pub fn add_interface(mut self, interface: InterfaceConfig<'a>) -> Self {
        if self.interfaces.push(interface).is_err() {
            self.too_many_interfaces = true;
        }
        self
    }

    pub fn interface_count(&self) -> usize {
        self.interfaces.len()
    }

    /// Replace the speed / duplex catalog, e.g. with one that appends newer
    /// link modes.
    pub fn set_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn freeze(self) -> Result<Bootstrap<N>> {
        if self.too_many_interfaces {
            warn!("ethernet link: more than {=usize} interfaces described", N);
            return Err(Error::InitializationFailure);
        }
        if !self.catalog.is_well_formed() {
            warn!("ethernet link: speed/duplex catalog is not in ascending bit order");
            return Err(Error::InitializationFailure);
        }

        let store = InstanceStore::initialize(&self.interfaces)?;
        Ok(Bootstrap::new(store, self.catalog))
    }
}

impl<'a, const N: usize> Default for Builder<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}
