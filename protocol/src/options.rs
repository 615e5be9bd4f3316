//! DHCP options module.
//!
//! Only the options the probe sends or reads are listed.
//!
//! [RFC 2132](https://tools.ietf.org/html/rfc2132)

use std::fmt;

/// DHCP options codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionTag {
    // RFC 1497 Vendor Extensions (RFC 2132 §3)
    SubnetMask = 1,
    Routers = 3,
    DomainNameServers = 6,
    // DHCP Extensions (RFC 2132 §9)
    AddressTime = 51,
    DhcpMessageType = 53,
    DhcpServerId = 54,
    ParameterList = 55,
    ClientId = 61,

    End = 255,
}

/// DHCP message types exchanged by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    DhcpDiscover = 1,
    DhcpOffer = 2,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MessageType::DhcpDiscover => "DHCPDISCOVER",
            MessageType::DhcpOffer => "DHCPOFFER",
        })
    }
}

/// The parameters the probe asks the server for, in request order.
pub const PARAMETER_LIST: [OptionTag; 3] = [
    OptionTag::Routers,
    OptionTag::SubnetMask,
    OptionTag::DomainNameServers,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_types_carry_their_wire_values() {
        assert_eq!(MessageType::DhcpDiscover as u8, 1);
        assert_eq!(MessageType::DhcpOffer as u8, 2);
        assert_eq!(MessageType::DhcpOffer.to_string(), "DHCPOFFER");
    }
}
