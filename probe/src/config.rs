//! Probe configuration.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};

use dhcp_protocol::{DHCP_PORT_CLIENT, DHCP_PORT_SERVER};

/// How long to wait for an offer by default.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where to send the `DHCPDISCOVER` and how long to wait for the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The limited broadcast address unless a server is targeted explicitly.
    pub server_address: Ipv4Addr,
    pub server_port: u16,
    /// The local port the socket binds to on all interfaces.
    pub client_port: u16,
    /// Bounds the whole wait, however many unrelated datagrams arrive.
    pub timeout: Duration,
}

impl Config {
    pub fn server_socket_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(self.server_address), self.server_port)
    }

    pub fn client_socket_address(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.client_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_address: Ipv4Addr::BROADCAST,
            server_port: DHCP_PORT_SERVER,
            client_port: DHCP_PORT_CLIENT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_broadcast() {
        let config = Config::default();

        assert_eq!(
            config.server_socket_address(),
            "255.255.255.255:67".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            config.client_socket_address(),
            "0.0.0.0:68".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
