//! DHCP transaction ID module.

use std::fmt;

use rand::Rng;

/// The client-chosen value a server echoes to match its reply to a request.
///
/// Kept as opaque bytes: it is only ever copied to and compared with the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId([u8; 4]);

impl TransactionId {
    /// Draws four independent random bytes from `rng`.
    ///
    /// Not cryptographically meaningful, only unlikely to collide with
    /// other exchanges on the same broadcast domain.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 4];
        rng.fill(&mut bytes);
        TransactionId(bytes)
    }

    /// `generate` with the thread-local generator.
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for TransactionId {
    fn from(bytes: [u8; 4]) -> Self {
        TransactionId(bytes)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:08x}", u32::from_be_bytes(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generation_is_driven_by_the_rng() {
        let first = TransactionId::generate(&mut StdRng::seed_from_u64(42));
        let second = TransactionId::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);

        let other = TransactionId::generate(&mut StdRng::seed_from_u64(43));
        assert_ne!(first, other);
    }

    #[test]
    fn displays_as_hex() {
        let id = TransactionId::from([0xde, 0xad, 0x00, 0x01]);
        assert_eq!(id.to_string(), "0xdead0001");
    }
}
