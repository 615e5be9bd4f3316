//! A broadcast UDP socket exchanging raw DHCP datagrams
//! through the `Stream` and `Sink` traits.

mod socket;

pub use self::socket::{DhcpFramed, DhcpSinkItem, DhcpStreamItem, BUFFER_READ_CAPACITY};
