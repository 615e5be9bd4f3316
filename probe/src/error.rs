//! Error module

use std::{io, time::Duration};

use thiserror::Error;

/// Returned by the probe and its argument handling.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Can't bind DHCP client port {port}: {source}")]
    Bind { port: u16, source: io::Error },
    #[error("Socket error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Protocol(#[from] dhcp_protocol::Error),
    #[error("No reply received within {} seconds", .0.as_secs_f64())]
    Timeout(Duration),
    #[error("Can't determine the hardware address of this host, pass it with --mac")]
    NoHardwareAddress,
    #[error("You must be root to run this program.")]
    Privileges,
}

impl Error {
    /// The process exit code: 1 if no server answered, 2 if the probe could not run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Timeout(_) => 1,
            _ => 2,
        }
    }
}
