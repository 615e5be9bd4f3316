//! `DHCPDISCOVER` serialization module.

use std::{mem, net::Ipv4Addr};

use bytes::{BufMut, Bytes, BytesMut};
use eui48::{MacAddress, EUI48LEN};

use crate::{
    constants::*,
    header::{HardwareType, OperationCode},
    options::{MessageType, OptionTag, PARAMETER_LIST},
    transaction_id::TransactionId,
};

/// The `DHCPDISCOVER` broadcast by the probe.
#[derive(Debug, Clone)]
pub struct Discover {
    pub client_hardware_address: MacAddress,
    pub transaction_id: TransactionId,
}

impl Discover {
    pub fn new(client_hardware_address: MacAddress, transaction_id: TransactionId) -> Self {
        Discover {
            client_hardware_address,
            transaction_id,
        }
    }

    /// DHCP message serialization.
    ///
    /// The output depends on the fields only, so equal messages always
    /// produce identical frames of `SIZE_DISCOVER` bytes.
    pub fn to_bytes(&self) -> Bytes {
        let hardware_address = self.client_hardware_address.as_bytes();
        let unspecified = u32::from(Ipv4Addr::UNSPECIFIED);

        let mut dst = BytesMut::with_capacity(SIZE_DISCOVER);
        dst.put_u8(OperationCode::BootRequest as u8);
        dst.put_u8(HardwareType::Ethernet as u8);
        dst.put_u8(EUI48LEN as u8);
        dst.put_u8(0); // hops
        dst.put_slice(self.transaction_id.as_bytes());
        dst.put_u16(0); // seconds
        dst.put_u16(FLAG_BROADCAST);
        dst.put_u32(unspecified); // client_ip_address
        dst.put_u32(unspecified); // your_ip_address
        dst.put_u32(unspecified); // server_ip_address
        dst.put_u32(unspecified); // gateway_ip_address
        dst.put_slice(hardware_address); // 6 byte MAC-48
        dst.put_bytes(0, SIZE_HARDWARE_ADDRESS - hardware_address.len()); // 10 byte padding
        dst.put_bytes(0, SIZE_SERVER_NAME_PADDING);
        dst.put_bytes(0, SIZE_BOOT_FILENAME_PADDING);
        dst.put_u32(MAGIC_COOKIE);

        dst.put_u8(OptionTag::DhcpMessageType as u8);
        dst.put_u8(mem::size_of::<u8>() as u8);
        dst.put_u8(MessageType::DhcpDiscover as u8);

        dst.put_u8(OptionTag::ClientId as u8);
        dst.put_u8(hardware_address.len() as u8);
        dst.put_slice(hardware_address);

        dst.put_u8(OptionTag::ParameterList as u8);
        dst.put_u8(PARAMETER_LIST.len() as u8);
        for tag in PARAMETER_LIST.iter() {
            dst.put_u8(*tag as u8);
        }

        dst.put_u8(OptionTag::End as u8);
        dst.freeze()
    }
}
