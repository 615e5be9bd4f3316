//! Macro functions used in the receive loop.

/// Just to move some code from the receive loop.
macro_rules! log_send(
    ($discover:expr, $destination:expr) => (
        info!("Sending {} to {}", MessageType::DhcpDiscover, $destination);
        debug!(
            "Transaction {}, client hardware address {}",
            $discover.transaction_id,
            $discover.client_hardware_address,
        );
    );
);

/// Just to move some code from the receive loop.
macro_rules! log_receive(
    ($offer:expr, $source:expr) => (
        info!("Received {} from {}", MessageType::DhcpOffer, $source);
        debug!("{:?}", $offer);
    );
);

/// Skips a datagram the socket failed to receive.
macro_rules! datagram_or_continue (
    ($item:expr) => (
        match $item {
            Ok(datagram) => datagram,
            Err(error) => {
                warn!("Socket error: {}", error);
                continue;
            },
        }
    );
);

/// Skips a datagram which is not an offer for this transaction.
macro_rules! offer_or_continue (
    ($frame:expr, $source:expr, $transaction_id:expr) => (
        match Offer::from_bytes(&$frame, $transaction_id) {
            Ok(Some(offer)) => offer,
            Ok(None) => {
                debug!(
                    "Got a response from {} with wrong transaction ID (yours is {})",
                    $source, $transaction_id,
                );
                continue;
            },
            Err(error) => {
                warn!("The response from {} is invalid: {}", $source, error);
                continue;
            },
        }
    );
);
