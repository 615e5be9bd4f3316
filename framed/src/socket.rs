//! The main DHCP socket module.

use std::{
    io,
    net::SocketAddr,
    pin::Pin,
    task::{Context, Poll},
};

use bytes::Bytes;
use futures::{ready, Sink, Stream};
use log::trace;
use net2::UdpBuilder;
use tokio::{io::ReadBuf, net::UdpSocket};

/// Must be enough to hold any reply the probe expects.
pub const BUFFER_READ_CAPACITY: usize = 2048;

/// A datagram and its source.
pub type DhcpStreamItem = (SocketAddr, Bytes);
/// A datagram and its destination.
pub type DhcpSinkItem = (SocketAddr, Bytes);

/// The modified version of the `tokio::UdpFramed`.
///
/// Leaves encoding to the caller: DHCP datagrams are matched against the
/// transaction they answer, which a stateless codec cannot do.
pub struct DhcpFramed {
    /// `tokio::UdpSocket`.
    socket: UdpSocket,
    /// Stores received data until it is copied out.
    buf_read: Vec<u8>,
    /// Stores the destination address and the datagram to send.
    pending: Option<DhcpSinkItem>,
}

impl DhcpFramed {
    /// Binds a broadcast-enabled socket to `addr`.
    ///
    /// # Errors
    /// `io::Error` on unsuccessful socket building or binding.
    pub fn bind(addr: SocketAddr) -> io::Result<Self> {
        let socket = UdpBuilder::new_v4()?.reuse_address(true)?.bind(addr)?;
        socket.set_nonblocking(true)?;
        let socket = UdpSocket::from_std(socket)?;
        socket.set_broadcast(true)?;
        Ok(Self::new(socket))
    }

    /// Wraps an already configured socket.
    pub fn new(socket: UdpSocket) -> Self {
        DhcpFramed {
            socket,
            buf_read: vec![0u8; BUFFER_READ_CAPACITY],
            pending: None,
        }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl Stream for DhcpFramed {
    type Item = io::Result<DhcpStreamItem>;

    /// Yields every datagram received, never ends.
    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let mut buf = ReadBuf::new(&mut this.buf_read);
        let result = match ready!(this.socket.poll_recv_from(cx, &mut buf)) {
            Ok(addr) => {
                trace!("Received {} bytes from {}", buf.filled().len(), addr);
                Ok((addr, Bytes::copy_from_slice(buf.filled())))
            }
            Err(error) => Err(error),
        };
        Poll::Ready(Some(result))
    }
}

impl Sink<DhcpSinkItem> for DhcpFramed {
    type Error = io::Error;

    /// Flushes the pending datagram, if any.
    fn poll_ready(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.poll_flush(cx)
    }

    /// Stores the datagram in order to send it when the socket is ready.
    ///
    /// # Errors
    /// `io::Error` if `poll_ready` has not been awaited first.
    fn start_send(self: Pin<&mut Self>, item: DhcpSinkItem) -> io::Result<()> {
        let this = self.get_mut();
        if this.pending.is_some() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "The pending datagram must be flushed first",
            ));
        }
        this.pending = Some(item);
        Ok(())
    }

    /// # Errors
    /// `io::Error` on a socket error or a partially sent datagram.
    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        if let Some((addr, data)) = this.pending.clone() {
            let sent = ready!(this.socket.poll_send_to(cx, &data, addr));
            let amount = data.len();
            this.pending = None;
            if sent? != amount {
                return Poll::Ready(Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "Failed to write entire datagram to socket",
                )));
            }
            trace!("Sent {} bytes to {}", amount, addr);
        }
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        self.poll_flush(cx)
    }
}
