//! Fixed BOOTP header field values.

use std::fmt;

/// DHCP opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationCode {
    Undefined = 0,
    BootRequest = 1,
    BootReply = 2,
}

/// DHCP hardware type.
///
/// The probe speaks MAC-48 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareType {
    Ethernet = 1,
}

impl From<u8> for OperationCode {
    fn from(value: u8) -> Self {
        match value {
            1 => OperationCode::BootRequest,
            2 => OperationCode::BootReply,
            _ => OperationCode::Undefined,
        }
    }
}

impl fmt::Display for OperationCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OperationCode::BootRequest => "BOOTREQUEST",
            OperationCode::BootReply => "BOOTREPLY",
            OperationCode::Undefined => "UNDEFINED",
        })
    }
}
