//! Client hardware address parsing.

use eui48::{MacAddress, EUI48LEN};

use crate::error::Error;

/// Parses exactly 12 hexadecimal digits without separators, two per octet.
///
/// # Errors
/// `Error::InvalidHardwareAddress` on any other length or a non-hex digit.
pub fn from_hex(hex: &str) -> Result<MacAddress, Error> {
    let invalid = || Error::InvalidHardwareAddress(hex.to_owned());

    if hex.len() != EUI48LEN * 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut octets = [0u8; EUI48LEN];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(MacAddress::new(octets))
}
