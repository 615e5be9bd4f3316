//! The human-readable probe result.

use std::{fmt, net::SocketAddr};

use chrono::Duration;

use dhcp_protocol::Offer;

/// An accepted offer and how long it took to arrive.
#[derive(Debug, Clone)]
pub struct Report {
    /// The socket address the offer came from.
    pub source: SocketAddr,
    pub offer: Offer,
    /// From binding the client socket to receiving the offer.
    pub elapsed: Duration,
}

impl Report {
    pub fn elapsed_secs(&self) -> f64 {
        match self.elapsed.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => self.elapsed.num_seconds() as f64,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let offer = &self.offer;
        writeln!(f, "{:18} : {}", "DHCP Server", offer.dhcp_server_id)?;
        writeln!(f, "{:18} : {}", "Offered IP address", offer.your_ip_address)?;
        writeln!(f, "{:18} : {}", "Next server", offer.server_ip_address)?;
        writeln!(f, "{:18} : {}", "Default router", offer.router)?;
        writeln!(f, "{:18} : {}", "Lease time", offer.address_time)?;
        writeln!(f, "{:18} : {}", "Subnet mask", offer.subnet_mask)?;

        let mut servers = offer.domain_name_servers.iter();
        if let Some(first) = servers.next() {
            writeln!(f, "{:18} : {}", "DNS Servers", first)?;
        }
        for server in servers {
            writeln!(f, "{:18}   {}", "", server)?;
        }

        writeln!(f, "{:18} : {:.6}", "Request time", self.elapsed_secs())
    }
}
