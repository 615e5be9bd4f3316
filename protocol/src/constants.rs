//! DHCP message constants.

use std::mem;

/// The DHCP server UDP port.
pub const DHCP_PORT_SERVER: u16 = 67;

/// The DHCP client UDP port.
pub const DHCP_PORT_CLIENT: u16 = 68;

/// `client_hardware_address` size in bytes.
pub const SIZE_HARDWARE_ADDRESS: usize = 16;

/// The zero padding written in place of `server_name`.
///
/// Three bytes longer than the 64 bytes of RFC 2131, compensated by
/// `SIZE_BOOT_FILENAME_PADDING`, so the magic cookie keeps its offset.
pub const SIZE_SERVER_NAME_PADDING: usize = 67;

/// The zero padding written in place of `boot_filename`.
pub const SIZE_BOOT_FILENAME_PADDING: usize = 125;

/// The option tag and length octets.
pub const SIZE_OPTION_PREFIX: usize = 2;

/// The size of an IPv4 address in bytes.
pub const SIZE_IPV4: usize = mem::size_of::<u32>();

/// The transaction ID offset in bytes.
pub const OFFSET_TRANSACTION_ID: usize = 4;

/// The `client_hardware_address` offset in bytes.
pub const OFFSET_CLIENT_HARDWARE_ADDRESS: usize = 28;

/// DHCP options magic cookie offset in bytes.
pub const OFFSET_MAGIC_COOKIE: usize = OFFSET_CLIENT_HARDWARE_ADDRESS
    + SIZE_HARDWARE_ADDRESS
    + SIZE_SERVER_NAME_PADDING
    + SIZE_BOOT_FILENAME_PADDING;

/// DHCP options themselves offset in bytes.
pub const OFFSET_OPTIONS: usize = OFFSET_MAGIC_COOKIE + mem::size_of::<u32>();

/*
The offer fields are read at fixed offsets. They match an option area starting
with the message type (53), server identifier (54), address time (51),
subnet mask (1), routers (3) and domain name servers (6), each with the
minimal length.
*/

/// The offered `your_ip_address` offset in bytes.
pub const OFFSET_YOUR_IP_ADDRESS: usize = 16;

/// The next `server_ip_address` offset in bytes.
pub const OFFSET_SERVER_IP_ADDRESS: usize = 20;

/// The `dhcp_server_id` option value offset in bytes.
pub const OFFSET_DHCP_SERVER_ID: usize = 245;

/// The `address_time` option value offset in bytes.
pub const OFFSET_ADDRESS_TIME: usize = 251;

/// The `subnet_mask` option value offset in bytes.
pub const OFFSET_SUBNET_MASK: usize = 257;

/// The first `routers` option value offset in bytes.
pub const OFFSET_ROUTER: usize = 263;

/// The `domain_name_servers` option length octet offset.
pub const OFFSET_DOMAIN_NAME_SERVERS_LENGTH: usize = 268;

/// The `domain_name_servers` option value offset in bytes.
pub const OFFSET_DOMAIN_NAME_SERVERS: usize = 269;

/// Only the highest bit of the `flags` field is used in DHCP.
pub const FLAG_BROADCAST: u16 = 0b1000000000000000;

/// The magic number before the DHCP options.
pub const MAGIC_COOKIE: u32 = 0x63825363;

/// The size of the `DHCPDISCOVER` the probe sends.
pub const SIZE_DISCOVER: usize = OFFSET_OPTIONS
    + (SIZE_OPTION_PREFIX + 1)
    + (SIZE_OPTION_PREFIX + eui48::EUI48LEN)
    + (SIZE_OPTION_PREFIX + 3)
    + 1;
