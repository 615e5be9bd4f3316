//! `DHCPOFFER` deserialization module.

use std::net::Ipv4Addr;

use bytes::Buf;
use log::trace;

use crate::{constants::*, error::Error, header::OperationCode, transaction_id::TransactionId};

/// The lease parameters offered by a DHCP server.
///
/// Only ever built as a whole from a frame that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub dhcp_server_id: Ipv4Addr,
    pub your_ip_address: Ipv4Addr,
    pub server_ip_address: Ipv4Addr,
    pub router: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    /// Lease time in seconds.
    pub address_time: u32,
    pub domain_name_servers: Vec<Ipv4Addr>,
}

/// Checks if the frame is long enough to read up to `$required`.
macro_rules! check_length(
    ($src:expr, $required:expr) => (
        if $src.len() < $required {
            return Err(Error::TruncatedFrame {
                length: $src.len(),
                required: $required,
            });
        }
    );
);

impl Offer {
    /// DHCP message deserialization.
    ///
    /// Returns `Ok(None)` if the frame belongs to another transaction,
    /// which is normal on a shared broadcast domain.
    ///
    /// # Errors
    /// `Error::TruncatedFrame` if the frame ends before any field it claims to carry.
    pub fn from_bytes(src: &[u8], transaction_id: TransactionId) -> Result<Option<Self>, Error> {
        let xid_range = OFFSET_TRANSACTION_ID..OFFSET_TRANSACTION_ID + 4;
        check_length!(src, xid_range.end);
        if &src[xid_range] != transaction_id.as_bytes() {
            return Ok(None);
        }

        check_length!(src, OFFSET_DOMAIN_NAME_SERVERS);
        let dns_count = src[OFFSET_DOMAIN_NAME_SERVERS_LENGTH] as usize / SIZE_IPV4;
        check_length!(src, OFFSET_DOMAIN_NAME_SERVERS + dns_count * SIZE_IPV4);

        trace!(
            "Decoding {} of {} bytes for transaction {}",
            OperationCode::from(src[0]),
            src.len(),
            transaction_id
        );

        Ok(Some(Offer {
            dhcp_server_id: Self::get_ipv4(src, OFFSET_DHCP_SERVER_ID),
            your_ip_address: Self::get_ipv4(src, OFFSET_YOUR_IP_ADDRESS),
            server_ip_address: Self::get_ipv4(src, OFFSET_SERVER_IP_ADDRESS),
            router: Self::get_ipv4(src, OFFSET_ROUTER),
            subnet_mask: Self::get_ipv4(src, OFFSET_SUBNET_MASK),
            address_time: (&src[OFFSET_ADDRESS_TIME..]).get_u32(),
            domain_name_servers: src[OFFSET_DOMAIN_NAME_SERVERS..]
                .chunks_exact(SIZE_IPV4)
                .take(dns_count)
                .map(|mut chunk| Ipv4Addr::from(chunk.get_u32()))
                .collect(),
        }))
    }

    /// Reads an address the caller has checked to be within `src`.
    fn get_ipv4(src: &[u8], offset: usize) -> Ipv4Addr {
        Ipv4Addr::from((&src[offset..offset + SIZE_IPV4]).get_u32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XID: [u8; 4] = [0x39, 0x03, 0xf3, 0x26];

    /// Builds an offer with the option layout the fixed offsets expect.
    fn offer_frame(xid: [u8; 4], dns: &[[u8; 4]], dns_length: u8) -> Vec<u8> {
        let mut frame = vec![0u8; OFFSET_OPTIONS];
        frame[0] = OperationCode::BootReply as u8;
        frame[1] = 1;
        frame[2] = 6;
        frame[4..8].copy_from_slice(&xid);
        frame[16..20].copy_from_slice(&[10, 0, 0, 5]);
        frame[20..24].copy_from_slice(&[10, 0, 0, 1]);
        frame[OFFSET_MAGIC_COOKIE..OFFSET_OPTIONS].copy_from_slice(&MAGIC_COOKIE.to_be_bytes());

        frame.extend_from_slice(&[53, 1, 2]);
        frame.extend_from_slice(&[54, 4, 10, 0, 0, 1]);
        frame.extend_from_slice(&[51, 4]);
        frame.extend_from_slice(&86400u32.to_be_bytes());
        frame.extend_from_slice(&[1, 4, 255, 255, 255, 0]);
        frame.extend_from_slice(&[3, 4, 10, 0, 0, 1]);
        frame.extend_from_slice(&[6, dns_length]);
        for server in dns {
            frame.extend_from_slice(server);
        }
        frame.push(255);
        frame
    }

    #[test]
    fn decodes_well_formed_offer() {
        let frame = offer_frame(XID, &[[8, 8, 8, 8], [8, 8, 4, 4]], 8);

        let offer = Offer::from_bytes(&frame, XID.into()).unwrap().unwrap();

        assert_eq!(
            offer,
            Offer {
                dhcp_server_id: Ipv4Addr::new(10, 0, 0, 1),
                your_ip_address: Ipv4Addr::new(10, 0, 0, 5),
                server_ip_address: Ipv4Addr::new(10, 0, 0, 1),
                router: Ipv4Addr::new(10, 0, 0, 1),
                subnet_mask: Ipv4Addr::new(255, 255, 255, 0),
                address_time: 86400,
                domain_name_servers: vec![Ipv4Addr::new(8, 8, 8, 8), Ipv4Addr::new(8, 8, 4, 4)],
            }
        );
    }

    #[test]
    fn offsets_match_the_option_layout() {
        let frame = offer_frame(XID, &[[1, 1, 1, 1]], 4);

        assert_eq!(frame[OFFSET_DHCP_SERVER_ID - 2], 54);
        assert_eq!(frame[OFFSET_ADDRESS_TIME - 2], 51);
        assert_eq!(frame[OFFSET_SUBNET_MASK - 2], 1);
        assert_eq!(frame[OFFSET_ROUTER - 2], 3);
        assert_eq!(frame[OFFSET_DOMAIN_NAME_SERVERS_LENGTH - 1], 6);
    }

    #[test]
    fn foreign_transaction_is_rejected() {
        let frame = offer_frame(XID, &[[8, 8, 8, 8]], 4);

        let result = Offer::from_bytes(&frame, [0x39, 0x03, 0xf3, 0x27].into());
        assert_eq!(result, Ok(None));

        // the rest of the frame is not looked at
        let result = Offer::from_bytes(&frame[..8], [0, 0, 0, 0].into());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn lease_time_is_big_endian() {
        let mut frame = offer_frame(XID, &[], 0);
        frame[OFFSET_ADDRESS_TIME..OFFSET_ADDRESS_TIME + 4]
            .copy_from_slice(&[0xff, 0xff, 0xff, 0xfe]);

        let offer = Offer::from_bytes(&frame, XID.into()).unwrap().unwrap();
        assert_eq!(offer.address_time, 0xfffffffe);
    }

    #[test]
    fn without_domain_name_servers() {
        let frame = offer_frame(XID, &[], 0);

        let offer = Offer::from_bytes(&frame, XID.into()).unwrap().unwrap();
        assert!(offer.domain_name_servers.is_empty());
    }

    #[test]
    fn dns_count_is_floored() {
        let mut frame = offer_frame(XID, &[[8, 8, 8, 8]], 6);
        frame.extend_from_slice(&[9, 9]);

        let offer = Offer::from_bytes(&frame, XID.into()).unwrap().unwrap();
        assert_eq!(offer.domain_name_servers, vec![Ipv4Addr::new(8, 8, 8, 8)]);
    }

    #[test]
    fn duplicate_servers_are_kept_in_order() {
        let frame = offer_frame(XID, &[[8, 8, 4, 4], [8, 8, 8, 8], [8, 8, 4, 4]], 12);

        let offer = Offer::from_bytes(&frame, XID.into()).unwrap().unwrap();
        assert_eq!(
            offer.domain_name_servers,
            vec![
                Ipv4Addr::new(8, 8, 4, 4),
                Ipv4Addr::new(8, 8, 8, 8),
                Ipv4Addr::new(8, 8, 4, 4),
            ]
        );
    }

    #[test]
    fn truncated_before_dns_length() {
        let frame = offer_frame(XID, &[], 0);

        let result = Offer::from_bytes(&frame[..OFFSET_DOMAIN_NAME_SERVERS_LENGTH], XID.into());
        assert_eq!(
            result,
            Err(Error::TruncatedFrame {
                length: 268,
                required: 269,
            })
        );
    }

    #[test]
    fn truncated_within_dns_list() {
        let frame = offer_frame(XID, &[[8, 8, 8, 8], [8, 8, 4, 4]], 8);

        // the end option is the last byte, so the list ends at len - 1
        let result = Offer::from_bytes(&frame[..frame.len() - 2], XID.into());
        assert_eq!(
            result,
            Err(Error::TruncatedFrame {
                length: 276,
                required: 277,
            })
        );
    }

    #[test]
    fn dns_length_beyond_frame() {
        let frame = offer_frame(XID, &[[8, 8, 8, 8]], 40);

        let result = Offer::from_bytes(&frame, XID.into());
        assert!(matches!(result, Err(Error::TruncatedFrame { required: 309, .. })));
    }

    #[test]
    fn too_short_for_transaction_id() {
        let result = Offer::from_bytes(&[2, 1, 6, 0, 0x39], XID.into());
        assert_eq!(
            result,
            Err(Error::TruncatedFrame {
                length: 5,
                required: 8,
            })
        );
    }
}
