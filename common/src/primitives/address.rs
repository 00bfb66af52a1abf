// Copyright (c) 2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// https://github.com/mintlayer/mintlayer-core/blob/master/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::str::FromStr;

use parity_scale_codec::{Decode, Encode};
use thiserror::Error;

/// Identity of a participant, the custodian, the owner or the ledger itself.
///
/// The text form is `0x` followed by 40 hex digits; parsing is case-insensitive.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct AccountAddress([u8; AccountAddress::LEN]);

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AddressParseError {
    #[error("Address must start with `0x`: `{0}`")]
    MissingPrefix(String),
    #[error("Address must have {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Address contains non-hex characters: `{0}`")]
    InvalidHex(String),
}

impl AccountAddress {
    pub const LEN: usize = 20;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Address whose last 8 bytes hold `v` in big-endian order; handy for fixtures.
    pub fn from_low_u64_be(v: u64) -> Self {
        let mut bytes = [0u8; Self::LEN];
        bytes[Self::LEN - 8..].copy_from_slice(&v.to_be_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; AccountAddress::LEN]> for AccountAddress {
    fn from(bytes: [u8; AccountAddress::LEN]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl std::fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl FromStr for AccountAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AddressParseError::MissingPrefix(s.to_owned()))?;

        if digits.len() != Self::LEN * 2 {
            return Err(AddressParseError::InvalidLength {
                expected: Self::LEN * 2,
                actual: digits.len(),
            });
        }

        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AddressParseError::InvalidHex(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

impl serde::Serialize for AccountAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for AccountAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Identifier of a locked-position token inside its asset contract.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Encode,
    Decode,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct PositionId(u64);

impl PositionId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
