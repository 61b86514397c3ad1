//! Per-caller options: diagnostics and the EAPOL key-information role table.
//!
//! [`FrameOptions`] is a plain value. Build it once, share it by reference; nothing in
//! it changes after construction.

use crate::address::{address_matches, Addressed};
use std::collections::BTreeMap;

/// Maps the low byte of an EAPOL key-information field (as a two-digit hex token) to
/// the 4-way-handshake message it identifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRoleTable {
    roles: BTreeMap<u8, String>,
}

impl Default for KeyRoleTable {
    fn default() -> Self {
        KeyRoleTable::from_entries([
            (0x8a, "a1"),
            (0x0a, "a2"),
            (0xca, "a3"),
            (0x89, "t1"),
            (0x09, "t2"),
            (0xc9, "t3"),
        ])
    }
}

impl KeyRoleTable {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        KeyRoleTable {
            roles: entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    pub fn role(&self, key_info: u8) -> Option<&str> {
        self.roles.get(&key_info).map(String::as_str)
    }

    /// Look up by hex token (`"8a"`, `"8A"`). Anything that is not one byte of hex is `None`.
    pub fn role_for_token(&self, token: &str) -> Option<&str> {
        let mut key = [0u8; 1];
        hex::decode_to_slice(token, &mut key).ok()?;
        self.role(key[0])
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameOptions {
    /// Emit a debug event for every address check.
    pub verbose: bool,
    pub key_roles: KeyRoleTable,
}

impl FrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_key_roles(mut self, key_roles: KeyRoleTable) -> Self {
        self.key_roles = key_roles;
        self
    }

    pub fn key_role(&self, token: &str) -> Option<&str> {
        self.key_roles.role_for_token(token)
    }

    /// True iff `address` is the frame's receiver, transmitter, BSSID or fourth address.
    pub fn matches<F: Addressed + ?Sized>(&self, address: &str, frame: &F) -> bool {
        address_matches(address, frame, self.verbose)
    }

    /// Both addresses appear in the frame. `a` is checked first; put the rarer address
    /// there to fail fast.
    pub fn pair_matches<F: Addressed + ?Sized>(&self, a: &str, b: &str, frame: &F) -> bool {
        self.matches(a, frame) && self.matches(b, frame)
    }
}
