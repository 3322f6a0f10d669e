//! Attribute access for the Ethernet Link object
//!
//! The object goes through two stages:
//!
//! - [`Bootstrap`]: produced by a successful initialization. Local start-up
//!   code can still rewrite the physical address of all instances at once.
//! - [`EthernetLink`]: produced by [`Bootstrap::go_online`] and handed to the
//!   explicit-messaging dispatcher. It only offers per-instance attribute
//!   access, so the bulk address path is unreachable from the network.
//!
//! A failed initialization never produces either value, so the object cannot
//! become reachable in that case.

use crate::attribute::{AttributeData, AttributeId, AttributeValue};
use crate::builder::InterfaceConfig;
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::eui48::Identifier as MacAddress;
use crate::instance::EthernetLinkInstance;
use crate::store::{InstanceId, InstanceStore};

/// Ethernet Link class code.
pub const CLASS_CODE: u16 = 0xF6;

/// Class revision reported by class attribute #1.
pub const CLASS_REVISION: u16 = 4;

/// CIP services understood by this object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Service {
    GetAttributesAll = 0x01,
    GetAttributeSingle = 0x0E,
    SetAttributeSingle = 0x10,
}

impl Service {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Service::GetAttributesAll),
            0x0E => Some(Service::GetAttributeSingle),
            0x10 => Some(Service::SetAttributeSingle),
            _ => None,
        }
    }
}

/// Decoded explicit-message request addressed to this class.
#[derive(Clone, Copy, Debug)]
pub struct Request<'a> {
    pub service: u8,
    /// 0 addresses the class itself.
    pub instance_id: InstanceId,
    /// Ignored by Get_Attributes_All.
    pub attribute_id: u16,
    pub data: &'a [u8],
}

/// Initialize the fixed instance set, one instance per interface.
pub fn initialize<const N: usize>(interfaces: &[InterfaceConfig<'_>]) -> Result<Bootstrap<N>> {
    let store = InstanceStore::initialize(interfaces)?;
    Ok(Bootstrap::new(store, Catalog::STANDARD))
}

/// Initialized object that is not yet reachable over the network.
pub struct Bootstrap<const N: usize> {
    store: InstanceStore<N>,
    catalog: Catalog,
}

impl<const N: usize> Bootstrap<N> {
    pub(crate) fn new(store: InstanceStore<N>, catalog: Catalog) -> Self {
        Bootstrap { store, catalog }
    }

    /// Write `address` to the physical address of every instance.
    ///
    /// Platforms exposing a single hardware address for several link
    /// instances call this once with that address.
    pub fn set_all_mac(&mut self, address: MacAddress) {
        self.store.set_all_mac(address);
    }

    pub fn instance(&self, id: InstanceId) -> Result<EthernetLinkInstance> {
        self.store.instance(id)
    }

    /// Hand the object to the dispatcher.
    pub fn go_online(self) -> EthernetLink<N> {
        info!("ethernet link: online with {=usize} instance(s)", N);
        EthernetLink {
            store: self.store,
            catalog: self.catalog,
        }
    }
}

/// Network-facing Ethernet Link object.
pub struct EthernetLink<const N: usize> {
    store: InstanceStore<N>,
    catalog: Catalog,
}

impl<const N: usize> EthernetLink<N> {
    pub fn instance_count(&self) -> usize {
        self.store.len()
    }

    /// Get_Attribute_Single.
    ///
    /// The instance is resolved before the attribute, so an unknown instance
    /// is reported as such whatever attribute id is asked for.
    pub fn get_attribute(&self, instance_id: InstanceId, attribute_id: u16) -> Result<AttributeData> {
        self.read_attribute(instance_id, attribute_id).map_err(|e| {
            trace!(
                "ethernet link: get {=u16}/{=u16} failed: {}",
                instance_id,
                attribute_id,
                e
            );
            e
        })
    }

    fn read_attribute(&self, instance_id: InstanceId, attribute_id: u16) -> Result<AttributeData> {
        if !self.store.contains(instance_id) {
            return Err(Error::InstanceNotFound);
        }
        let id = AttributeId::from_id(attribute_id).ok_or(Error::AttributeNotSupported)?;

        // Copy the value out under the lock; encoding happens after release.
        let value = self
            .store
            .with_instance(instance_id, |instance| AttributeValue::read(id, instance))?;

        let mut data = AttributeData::new();
        value.encode(&self.catalog, &mut data)?;
        trace!(
            "ethernet link: get {=u16}/{=u16} -> {=usize} bytes",
            instance_id,
            attribute_id,
            data.len()
        );
        Ok(data)
    }

    /// Set_Attribute_Single.
    ///
    /// The payload is validated completely before the instance is locked; on
    /// any error the instance is unchanged.
    pub fn set_attribute(
        &self,
        instance_id: InstanceId,
        attribute_id: u16,
        data: &[u8],
    ) -> Result<()> {
        self.write_attribute(instance_id, attribute_id, data)
            .map_err(|e| {
                warn!(
                    "ethernet link: set {=u16}/{=u16} rejected: {}",
                    instance_id,
                    attribute_id,
                    e
                );
                e
            })
    }

    fn write_attribute(&self, instance_id: InstanceId, attribute_id: u16, data: &[u8]) -> Result<()> {
        if !self.store.contains(instance_id) {
            return Err(Error::InstanceNotFound);
        }
        let id = AttributeId::from_id(attribute_id).ok_or(Error::AttributeNotSupported)?;
        if !id.is_settable() {
            return Err(Error::AttributeNotSettable);
        }

        let value = AttributeValue::decode(id, data)?;
        self.store
            .modify_instance(instance_id, |instance| value.apply(instance))?;
        debug!("ethernet link: set {=u16}/{=u16}", instance_id, attribute_id);
        Ok(())
    }

    /// Get_Attributes_All: every implemented attribute in ascending id order.
    pub fn get_attributes_all(&self, instance_id: InstanceId) -> Result<AttributeData> {
        let snapshot = self.store.instance(instance_id)?;

        let mut data = AttributeData::new();
        for id in AttributeId::ALL {
            AttributeValue::read(id, &snapshot).encode(&self.catalog, &mut data)?;
        }
        Ok(data)
    }

    /// Class attributes: revision, max instance and number of instances.
    pub fn get_class_attribute(&self, attribute_id: u16) -> Result<AttributeData> {
        let value: u16 = match attribute_id {
            1 => CLASS_REVISION,
            2 | 3 => self.store.len() as u16,
            _ => return Err(Error::AttributeNotSupported),
        };

        let mut data = AttributeData::new();
        data.extend_from_slice(&value.to_le_bytes())
            .map_err(|_| Error::ReplyDataTooLarge)?;
        Ok(data)
    }

    /// Route a decoded request. Set_Attribute_Single answers with no data.
    pub fn handle(&self, request: &Request<'_>) -> Result<AttributeData> {
        let service = Service::from_code(request.service).ok_or(Error::ServiceNotSupported)?;

        match (service, request.instance_id) {
            (Service::GetAttributeSingle, 0) => self.get_class_attribute(request.attribute_id),
            (_, 0) => Err(Error::ServiceNotSupported),
            (Service::GetAttributeSingle, instance_id) => {
                self.get_attribute(instance_id, request.attribute_id)
            }
            (Service::SetAttributeSingle, instance_id) => self
                .set_attribute(instance_id, request.attribute_id, request.data)
                .map(|_| AttributeData::new()),
            (Service::GetAttributesAll, instance_id) => self.get_attributes_all(instance_id),
        }
    }
}
