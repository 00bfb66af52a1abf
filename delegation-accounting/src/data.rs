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

use std::collections::BTreeMap;

use common::{AccountAddress, Amount, BlockTimestamp};
use parity_scale_codec::{Decode, Encode};

/// The accounting record of one participant.
///
/// A zero-valued position (`Default`) stands for an account that was never enrolled.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct DelegatorPosition {
    committed_amount: Amount,
    start_date: BlockTimestamp,
    restake: bool,
}

impl DelegatorPosition {
    pub fn new(committed_amount: Amount, start_date: BlockTimestamp, restake: bool) -> Self {
        Self {
            committed_amount,
            start_date,
            restake,
        }
    }

    /// Total value currently attributed to the participant.
    pub fn committed_amount(&self) -> Amount {
        self.committed_amount
    }

    /// Amount-weighted average of all contribution timestamps.
    pub fn start_date(&self) -> BlockTimestamp {
        self.start_date
    }

    pub fn restake(&self) -> bool {
        self.restake
    }
}

/// Position of an account in the registry: `0` for "not enrolled", otherwise the 1-based slot.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct RegistryIndex(u64);

impl RegistryIndex {
    pub const NOT_ENROLLED: Self = Self(0);

    pub const fn from_u64(v: u64) -> Self {
        Self(v)
    }

    /// Index of the 0-based registry slot `slot`.
    pub fn from_slot(slot: u64) -> Option<Self> {
        slot.checked_add(1).map(Self)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    pub const fn is_enrolled(&self) -> bool {
        self.0 != 0
    }

    /// 0-based slot in the registry, `None` if not enrolled.
    pub fn slot(&self) -> Option<u64> {
        self.0.checked_sub(1)
    }
}

/// One registry entry as exposed to readers, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserRecord {
    pub address: AccountAddress,
    pub committed_amount: Amount,
    pub start_date: BlockTimestamp,
    pub restake: bool,
}

impl UserRecord {
    pub fn new(address: AccountAddress, position: &DelegatorPosition) -> Self {
        Self {
            address,
            committed_amount: position.committed_amount(),
            start_date: position.start_date(),
            restake: position.restake(),
        }
    }
}

/// Writes staged by a [crate::DelegationCache] and not yet flushed to storage.
#[derive(Clone, Encode, Decode, Debug, Default, PartialEq, Eq)]
pub struct DelegationDeltaData {
    pub(crate) positions: BTreeMap<AccountAddress, DelegatorPosition>,
    /// Accounts to append to the registry, in order.
    pub(crate) enrollments: Vec<AccountAddress>,
}

impl DelegationDeltaData {
    pub fn new() -> Self {
        Self {
            positions: BTreeMap::new(),
            enrollments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.enrollments.is_empty()
    }

    pub fn positions(&self) -> &BTreeMap<AccountAddress, DelegatorPosition> {
        &self.positions
    }

    pub fn enrollments(&self) -> &[AccountAddress] {
        &self.enrollments
    }
}

/// Everything needed to revert one flushed [DelegationDeltaData].
#[must_use]
#[derive(Clone, Encode, Decode, Debug, PartialEq, Eq)]
pub struct DelegationUndo {
    pub(crate) previous_positions: BTreeMap<AccountAddress, Option<DelegatorPosition>>,
    pub(crate) enrollments: Vec<AccountAddress>,
    pub(crate) registry_len_before: u64,
}
