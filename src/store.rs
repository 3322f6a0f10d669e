//! Ethernet Link instance store
//!
//! Owns every instance of the object. Instance ids are 1-based; id 0 is the
//! class itself and never resolves to an instance. Each instance sits behind
//! its own critical-section mutex, held only while fields are copied in or
//! out.

use core::cell::RefCell;
use critical_section::Mutex;

use crate::builder::InterfaceConfig;
use crate::error::{Error, Result};
use crate::eui48::Identifier as MacAddress;
use crate::instance::EthernetLinkInstance;
use crate::label::InterfaceLabel;

pub type InstanceId = u16;

pub struct InstanceStore<const N: usize> {
    instances: [Mutex<RefCell<EthernetLinkInstance>>; N],
}

impl<const N: usize> InstanceStore<N> {
    /// Seed the fixed instance set, one instance per interface description.
    ///
    /// Every instance starts from the blank default and then takes the speed,
    /// flags, label and capability of its interface. Fails when the number of
    /// descriptions differs from `N`, when `N` is zero, or when a label does
    /// not fit.
    pub fn initialize(interfaces: &[InterfaceConfig<'_>]) -> Result<Self> {
        if N == 0 || u16::try_from(N).is_err() {
            warn!("ethernet link: unsupported instance count {=usize}", N);
            return Err(Error::InitializationFailure);
        }
        if interfaces.len() != N {
            warn!(
                "ethernet link: {=usize} interfaces described for {=usize} instances",
                interfaces.len(),
                N
            );
            return Err(Error::InitializationFailure);
        }

        let mut instances: [EthernetLinkInstance; N] =
            core::array::from_fn(|_| EthernetLinkInstance::default());

        for (instance, config) in instances.iter_mut().zip(interfaces) {
            instance.interface_label = InterfaceLabel::new(config.label()).map_err(|_| {
                warn!(
                    "ethernet link: interface label of {=usize} bytes rejected",
                    config.label().len()
                );
                Error::InitializationFailure
            })?;
            instance.interface_speed = config.interface_speed();
            instance.interface_flags = config.interface_flags();
            instance.interface_caps = config.capability();
        }

        info!("ethernet link: {=usize} instance(s) initialized", N);
        Ok(InstanceStore {
            instances: instances.map(|instance| Mutex::new(RefCell::new(instance))),
        })
    }

    fn slot(&self, id: InstanceId) -> Result<&Mutex<RefCell<EthernetLinkInstance>>> {
        let index = (id as usize)
            .checked_sub(1)
            .ok_or(Error::InstanceNotFound)?;
        self.instances.get(index).ok_or(Error::InstanceNotFound)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.slot(id).is_ok()
    }

    /// Snapshot of one instance.
    pub fn instance(&self, id: InstanceId) -> Result<EthernetLinkInstance> {
        self.with_instance(id, |instance| instance.clone())
    }

    /// Run `f` against an instance while holding its lock.
    pub fn with_instance<R>(
        &self,
        id: InstanceId,
        f: impl FnOnce(&EthernetLinkInstance) -> R,
    ) -> Result<R> {
        let slot = self.slot(id)?;
        Ok(critical_section::with(|cs| f(&slot.borrow_ref(cs))))
    }

    pub(crate) fn modify_instance<R>(
        &self,
        id: InstanceId,
        f: impl FnOnce(&mut EthernetLinkInstance) -> R,
    ) -> Result<R> {
        let slot = self.slot(id)?;
        Ok(critical_section::with(|cs| f(&mut slot.borrow_ref_mut(cs))))
    }

    /// Overwrite the physical address of every instance.
    pub fn set_all_mac(&self, address: MacAddress) {
        critical_section::with(|cs| {
            for slot in self.instances.iter() {
                slot.borrow_ref_mut(cs).physical_address = address;
            }
        });
        info!("ethernet link: physical address of all instances set to {}", address);
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Valid instance ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = InstanceId> {
        (1..=N).map(|id| id as InstanceId)
    }
}
