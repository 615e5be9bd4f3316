//! The DHCP probe message codec.
//!
//! Serializes the `DHCPDISCOVER` sent by the probe and extracts the lease
//! parameters from a `DHCPOFFER` laid out the way common servers lay it out.

pub mod constants;
pub mod hardware_address;
pub mod header;
pub mod options;

mod discover;
mod error;
mod offer;
mod transaction_id;

pub use self::{
    constants::*,
    discover::Discover,
    error::Error,
    header::{HardwareType, OperationCode},
    offer::Offer,
    options::{MessageType, OptionTag},
    transaction_id::TransactionId,
};

pub use eui48::MacAddress;
