//! Hardware addresses and the address-matching predicates.

use crate::error::{FrameError, Result};
use crate::parser::parse_mac;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// MAC address (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const BROADCAST: MacAddr = MacAddr([0xff; 6]);

    pub fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(data: &[u8]) -> Option<Self> {
        let bytes: [u8; 6] = data.get(..6)?.try_into().ok()?;
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl FromStr for MacAddr {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        parse_mac(s).map(MacAddr)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

/// The four address fields of an 802.11 header. Fields a frame does not carry are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressSet {
    /// Address 1 (receiver)
    pub addr1: Option<MacAddr>,
    /// Address 2 (transmitter)
    pub addr2: Option<MacAddr>,
    /// Address 3 (BSSID)
    pub addr3: Option<MacAddr>,
    /// Address 4 (WDS)
    pub addr4: Option<MacAddr>,
}

impl AddressSet {
    pub fn new(
        addr1: Option<MacAddr>,
        addr2: Option<MacAddr>,
        addr3: Option<MacAddr>,
        addr4: Option<MacAddr>,
    ) -> Self {
        AddressSet { addr1, addr2, addr3, addr4 }
    }

    pub fn iter(&self) -> impl Iterator<Item = MacAddr> + '_ {
        [self.addr1, self.addr2, self.addr3, self.addr4].into_iter().flatten()
    }

    pub fn contains(&self, mac: &MacAddr) -> bool {
        self.iter().any(|a| a == *mac)
    }
}

/// A frame that may carry 802.11 addressing.
pub trait Addressed {
    /// `None` when the frame has no addressing structure at all.
    fn addresses(&self) -> Option<AddressSet>;
}

impl Addressed for AddressSet {
    fn addresses(&self) -> Option<AddressSet> {
        Some(*self)
    }
}

impl<T: Addressed> Addressed for Option<T> {
    fn addresses(&self) -> Option<AddressSet> {
        self.as_ref().and_then(Addressed::addresses)
    }
}

impl<T: Addressed + ?Sized> Addressed for &T {
    fn addresses(&self) -> Option<AddressSet> {
        (**self).addresses()
    }
}

/// True if `address` is one of the frame's address fields. Never fails: an unparsable
/// address or a frame without addressing is a non-match.
pub(crate) fn address_matches<F: Addressed + ?Sized>(address: &str, frame: &F, verbose: bool) -> bool {
    let matched = match (address.parse::<MacAddr>(), frame.addresses()) {
        (Ok(mac), Some(set)) => set.contains(&mac),
        _ => false,
    };
    if verbose {
        debug!(mac = address, matched, "address filter");
    }
    matched
}

/// Address check without diagnostics. See [`FrameOptions::matches`](crate::FrameOptions::matches).
pub fn matches<F: Addressed + ?Sized>(address: &str, frame: &F) -> bool {
    address_matches(address, frame, false)
}

/// Both addresses are in the frame; `a` is checked first.
pub fn pair_matches<F: Addressed + ?Sized>(a: &str, b: &str, frame: &F) -> bool {
    matches(a, frame) && matches(b, frame)
}
