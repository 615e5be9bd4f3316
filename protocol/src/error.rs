//! Error module

use thiserror::Error;

/// Returned by the hardware address parser and `Offer::from_bytes`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid hardware address '{0}': 12 hexadecimal digits expected")]
    InvalidHardwareAddress(String),
    #[error("Truncated frame: {length} bytes received, at least {required} required")]
    TruncatedFrame { length: usize, required: usize },
}
