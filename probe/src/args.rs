//! Command line arguments.

use std::{net::Ipv4Addr, time::Duration};

use clap::Parser;
use log::warn;

use dhcp_protocol::{hardware_address, MacAddress, DHCP_PORT_CLIENT, DHCP_PORT_SERVER};

use crate::{
    config::{Config, DEFAULT_TIMEOUT_SECS},
    error::Error,
};

/// Sends a DHCPDISCOVER to see if a DHCP server is up and running.
#[derive(Debug, Parser)]
#[command(name = "dhcp-probe", version)]
pub struct Args {
    /// MAC address, with or without ':' separators. Default the MAC of this host
    #[arg(short = 'm', long = "mac")]
    pub mac_address: Option<String>,

    /// DHCP server address
    #[arg(short = 's', long = "server", default_value_t = Ipv4Addr::BROADCAST)]
    pub server_address: Ipv4Addr,

    /// Seconds to wait for an offer
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Local UDP port to send from and listen on
    #[arg(short = 'p', long, default_value_t = DHCP_PORT_CLIENT)]
    pub client_port: u16,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            server_address: self.server_address,
            server_port: DHCP_PORT_SERVER,
            client_port: self.client_port,
            timeout: Duration::from_secs(self.timeout),
        }
    }

    /// The explicit hardware address or, if absent, the host's.
    ///
    /// # Errors
    /// `Error::Protocol` on a malformed address,
    /// `Error::NoHardwareAddress` if the host has none to offer.
    pub fn hardware_address(&self) -> Result<MacAddress, Error> {
        match self.mac_address {
            Some(ref address) => Ok(parse_hardware_address(address)?),
            None => host_hardware_address(),
        }
    }
}

/// Strips the usual ':' or '-' separators before parsing the hex digits.
fn parse_hardware_address(address: &str) -> Result<MacAddress, dhcp_protocol::Error> {
    let hex: String = address.chars().filter(|c| *c != ':' && *c != '-').collect();
    hardware_address::from_hex(&hex)
}

fn host_hardware_address() -> Result<MacAddress, Error> {
    match mac_address::get_mac_address() {
        Ok(Some(address)) => Ok(MacAddress::new(address.bytes())),
        Ok(None) => Err(Error::NoHardwareAddress),
        Err(error) => {
            warn!("Failed to read the host hardware address: {}", error);
            Err(Error::NoHardwareAddress)
        }
    }
}
