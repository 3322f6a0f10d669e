//! CIP Ethernet Link object
//!
//! Implements class `0xF6` of an EtherNet/IP adapter: one instance per
//! physical Ethernet interface, exposing its speed, flags, MAC address, label
//! and interface capability to explicit-messaging clients.
//!
//! The generic CIP dispatcher and the encapsulation layer live elsewhere; this
//! crate is handed decoded requests and answers with encoded attribute data or
//! an [`Error`].
//!
//! # Usage
//!
//! ```
//! use cip_ethlink::{Builder, InterfaceConfig, MacAddress};
//! use cip_ethlink::capability::{CapabilityBits, InterfaceCapability, SpeedDuplexSelector};
//!
//! let caps = InterfaceCapability::new(
//!     CapabilityBits::AUTO_NEGOTIATION,
//!     SpeedDuplexSelector::SPEED_100MBPS_FULL_DUPLEX,
//! );
//!
//! let mut bootstrap = Builder::<1>::new()
//!     .add_interface(InterfaceConfig::new().set_label("X1").set_capability(caps))
//!     .freeze()
//!     .unwrap();
//! bootstrap.set_all_mac(MacAddress::new([0x00, 0x1D, 0x9C, 0x12, 0x34, 0x56]));
//!
//! let link = bootstrap.go_online();
//! let data = link.get_attribute(1, 11).unwrap();
//! assert_eq!(&data[..], &[0x02, 0, 0, 0, 0x01, 0x00, 16, 0]);
//! ```
//!
//! # Features
//!
//! - `defmt`: log through `defmt` and implement `defmt::Format` for the
//!   public value types.
//!
//! On bare-metal ARM targets the critical-section implementation comes from
//! `cortex-m`. Other targets must link one themselves.

#![no_std]

#[cfg(all(target_arch = "arm", target_os = "none"))]
use cortex_m as _;

#[macro_use]
mod fmt;

pub mod attribute;
pub mod builder;
pub mod capability;
pub mod catalog;
pub mod encoder;
pub mod error;
pub mod eui48;
pub mod instance;
pub mod label;
pub mod object;
pub mod phy;
pub mod store;

pub use attribute::{AttributeData, AttributeId};
pub use builder::{Builder, InterfaceConfig};
pub use error::{Error, Result};
pub use eui48::Identifier as MacAddress;
pub use instance::EthernetLinkInstance;
pub use object::{initialize, Bootstrap, EthernetLink, Request, Service, CLASS_CODE};
