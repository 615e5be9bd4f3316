//! The probe itself: one `DHCPDISCOVER`, then the first matching `DHCPOFFER`.

use std::{io, net::SocketAddr};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::{SinkExt, Stream, StreamExt};
use log::{debug, info, warn};
use tokio::time;

use dhcp_framed::DhcpFramed;
use dhcp_protocol::{Discover, MacAddress, MessageType, Offer, TransactionId};

use crate::{config::Config, error::Error, report::Report};

/// Probes DHCP servers reachable with one configuration.
pub struct Probe {
    config: Config,
    client_hardware_address: MacAddress,
}

/// A `DHCPDISCOVER` that has been sent and awaits its offer.
pub struct Exchange {
    socket: DhcpFramed,
    transaction_id: TransactionId,
    config: Config,
    started: DateTime<Utc>,
}

impl Probe {
    pub fn new(config: Config, client_hardware_address: MacAddress) -> Self {
        Probe {
            config,
            client_hardware_address,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends a `DHCPDISCOVER` and waits for the offer.
    ///
    /// # Errors
    /// See `discover` and `Exchange::wait_offer`.
    pub async fn run(&self) -> Result<Report, Error> {
        self.discover().await?.wait_offer().await
    }

    /// Binds the client socket and sends a `DHCPDISCOVER` with a new transaction ID.
    ///
    /// # Errors
    /// `Error::Bind` if the client port is unavailable, `Error::Io` if sending fails.
    pub async fn discover(&self) -> Result<Exchange, Error> {
        let started = Utc::now();

        let client_address = self.config.client_socket_address();
        let mut socket = DhcpFramed::bind(client_address).map_err(|source| Error::Bind {
            port: client_address.port(),
            source,
        })?;

        let discover = Discover::new(self.client_hardware_address, TransactionId::random());
        let destination = self.config.server_socket_address();
        log_send!(discover, destination);
        socket.send((destination, discover.to_bytes())).await?;

        Ok(Exchange {
            socket,
            transaction_id: discover.transaction_id,
            config: self.config.clone(),
            started,
        })
    }
}

impl Exchange {
    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// Waits for the first offer answering this transaction.
    ///
    /// Datagrams of other transactions, truncated frames and receive errors
    /// are logged and skipped.
    ///
    /// # Errors
    /// `Error::Timeout` if no offer arrived within the configured timeout.
    pub async fn wait_offer(mut self) -> Result<Report, Error> {
        let timeout = self.config.timeout;
        let offer = receive(&mut self.socket, self.transaction_id);
        let (source, offer) = time::timeout(timeout, offer)
            .await
            .map_err(|_| Error::Timeout(timeout))??;

        Ok(Report {
            source,
            offer,
            elapsed: Utc::now() - self.started,
        })
    }
}

/// Reads `datagrams` until one of them is an offer for `transaction_id`.
async fn receive<S>(
    datagrams: &mut S,
    transaction_id: TransactionId,
) -> Result<(SocketAddr, Offer), Error>
where
    S: Stream<Item = io::Result<(SocketAddr, Bytes)>> + Unpin,
{
    while let Some(item) = datagrams.next().await {
        let (source, frame) = datagram_or_continue!(item);
        let offer = offer_or_continue!(frame, source, transaction_id);
        log_receive!(offer, source);
        return Ok((source, offer));
    }

    Err(Error::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "The socket stream has ended",
    )))
}
