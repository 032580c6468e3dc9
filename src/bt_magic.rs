use std::net::Ipv6Addr;

use crate::data_types::BtAddress;

/// Universal/local bit of the first octet.
const UL_BIT: u8 = 0x02;

#[derive(Default)]
pub struct BtMagic;

impl BtMagic {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// First octet with the U/L bit cleared, printed as the "link local" variant.
    #[must_use]
    pub fn msb_laa(&self, msb: u8) -> u8 {
        (msb | UL_BIT) ^ UL_BIT
    }

    /// First octet with the U/L bit set, printed as the "public" variant.
    #[must_use]
    pub fn msb_pub(&self, msb: u8) -> u8 {
        msb | UL_BIT
    }

    #[must_use]
    pub fn link_local(&self, addr: &BtAddress) -> String {
        self.eui64_string(self.msb_laa(addr.msb()), addr)
    }

    #[must_use]
    pub fn public(&self, addr: &BtAddress) -> String {
        self.eui64_string(self.msb_pub(addr.msb()), addr)
    }

    /// Zero padded [`Ipv6Addr`] for the same interface identifier.
    ///
    /// The string forms glue groups together as typed, so `1:2:3:4:5:6` yields
    /// `fe80::12:3ff:fe4:56` there while the real EUI-64 is `fe80::102:3ff:fe04:506`.
    #[must_use]
    pub fn canonical(&self, msb: u8, addr: &BtAddress) -> Ipv6Addr {
        let mut bytes = [0u8; 16];
        bytes[0] = 0xfe;
        bytes[1] = 0x80;
        bytes[8] = msb;
        bytes[9] = addr.raw[1];
        bytes[10] = addr.raw[2];
        bytes[11] = 0xff;
        bytes[12] = 0xfe;
        bytes[13] = addr.raw[3];
        bytes[14] = addr.raw[4];
        bytes[15] = addr.raw[5];
        Ipv6Addr::from(bytes)
    }

    fn eui64_string(&self, msb: u8, addr: &BtAddress) -> String {
        format!(
            "fe80::{msb:x}{}:{}ff:fe{}:{}{}",
            addr.group(1),
            addr.group(2),
            addr.group(3),
            addr.group(4),
            addr.group(5),
        )
    }
}
